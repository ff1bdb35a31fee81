//! `nefetch status` – report which dataset files exist locally.

use nefetch_core::status;
use std::path::Path;

pub fn run_status(dest: &Path) {
    for s in status::inspect(dest) {
        match s.bytes {
            Some(n) => println!("{:>12}  {}", n, s.path.display()),
            None => println!("{:>12}  {}", "absent", s.path.display()),
        }
    }
}
