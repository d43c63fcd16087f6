//! Print mode: sorted URLs to stdout, one per line.

pub fn run_print(urls: &[String]) {
    for url in urls {
        println!("{}", url);
    }
}
