//! Computes Fibonacci numbers in a checked 8192-bit integer until one no longer fits.

use limbint::{Checked, U8192};

fn main() {
	let verbosity = std::env::args().filter(|arg| arg == "-v").count();
	stderrlog::new().module("limbint").verbosity(verbosity + 1).init().unwrap();

	let mut a = U8192::<Checked>::one();
	let mut b = U8192::<Checked>::zero();
	let mut i = 0_usize;
	loop {
		match b.try_add(&a) {
			Ok(c) => {
				a = std::mem::replace(&mut b, c);
				i += 1;
			},
			Err(err) => {
				println!("stopped due to {err}");
				break;
			},
		}
	}
	println!("{i}: {b:#x}");
	println!("{} bits", b.bit_width());
}
