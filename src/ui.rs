pub(crate) fn progress(message: &str) {
    eprintln!("==> {message}");
}
