//! Miller-Rabin on a few small values and on the Carmichael numbers below 2**19.
//!
//! Usage: prime_test [-v]... [N]...
//! Each extra argument is tested as a 128-bit value.

use limbint::{miller_rabin_default, Checked, Error, U128, U64};

const TRIALS: usize = 25;

const CARMICHAEL: [u64; 33] = [
	561, 1105, 1729, 2465, 2821, 6601, 8911, 10585, 15841, 29341, 41041, 46657, 52633, 62745,
	63973, 75361, 101101, 115921, 126217, 162401, 172081, 188461, 252601, 278545, 294409, 314821,
	334153, 340561, 399001, 410041, 449065, 488881, 512461,
];

fn main() -> Result<(), Error> {
	let args: Vec<String> = std::env::args().skip(1).collect();
	let verbosity = args.iter().filter(|arg| *arg == "-v").count();
	stderrlog::new().module("limbint").verbosity(verbosity + 1).init().unwrap();

	let test = |x: u64| -> Result<(), Error> {
		let prime = miller_rabin_default(&U64::<Checked>::try_from(x)?, TRIALS)?;
		println!("is {x} prime? {prime}");
		Ok(())
	};

	for x in [0, 1, 2, 3, 4, 5, 77, 79] {
		test(x)?;
	}
	for x in CARMICHAEL {
		test(x)?;
	}

	for arg in args.iter().filter(|arg| *arg != "-v") {
		let n: U128<Checked> = arg.parse()?;
		match miller_rabin_default(&n, TRIALS) {
			Ok(prime) => println!("is {n} prime? {prime}"),
			Err(err) => println!("cannot test {n}: {err}"),
		}
	}
	Ok(())
}
