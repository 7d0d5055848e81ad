//! Tour of the `Uint` surface. Pass `-v` (repeatable) to see the library's log output.

use limbint::{uint_type, Checked, Error, Wrapping, U256, U32};

type X256 = U256<Wrapping>;
type X256s = U256<Checked>;

fn init_logging() {
	let verbosity = std::env::args().filter(|arg| arg == "-v").count();
	stderrlog::new()
		.module("limbint")
		.module(module_path!())
		.verbosity(verbosity + 1)
		.init()
		.unwrap();
}

fn show<const B: usize, const L: usize, S: limbint::Safety, K: limbint::StorageKind>(
	name: &str,
	x: &limbint::Uint<B, L, S, K>,
) {
	println!("{name} = {x} ({x:?})");
}

fn main() -> Result<(), Error> {
	init_logging();

	let mut a = X256::try_from(10_u32)?;
	println!("1: a = {a}");

	a = X256::max_value();
	println!("2: a = {a:#x}");

	let b = X256::try_from(7_u32)?;
	println!("3: b = {b}");

	let c = X256::from_str_radix("110011", 2)?;
	println!("4: c = {c}");

	type X5 = uint_type!(5, Checked);
	let d = X5::try_from(5_u8)?;
	println!("5: d = {d} has parameters <{}, {}>", X5::BITS, X5::is_checked());

	a = X256::try_from(10_u32)?;
	println!("6: a = {}", a.to_native::<u64>()?);
	if !a.is_zero() {
		println!("7: a is non-zero: {a}");
	}

	a = X256::zero() - X256::one();
	println!("8: a = {a:#x}");

	// A checked operand makes the whole operation checked.
	let aa: X256s = a.into_checked();
	match aa.try_add(&a.into_checked()) {
		Ok(sum) => println!("unexpected: {sum}"),
		Err(err) => println!("9: checked version fails: {err}"),
	}

	a = X256::try_from(0xdeadbeef_u32)?;
	println!("10: a in binary = {}", a.to_bin());
	println!("11: a in decimal = {}", a.to_dec());
	println!("12: a in lower case hex = {}", a.to_hex(false));
	println!("13: a in upper case hex = {}", a.to_hex(true));
	println!("14: a in octal = {}", a.to_oct());
	println!("15: a in base 36 = {}", a.to_string_radix(36, false)?);

	let mut buffer = [0_u8; X256::BYTES];
	a.to_little_endian(&mut buffer)?;
	println!("16: little endian: {:02x?}", buffer);
	a.to_big_endian(&mut buffer)?;
	println!("17: big endian:    {:02x?}", buffer);

	let e: X256 = "0x123456789abcdef0".parse()?;
	let f: U32 = e.wrapping_cast();
	println!("18: f = {f:#x}");
	let ff: Result<U32<Checked>, Error> = e.try_cast();
	if let Err(err) = ff {
		println!("19: truncation was prevented: {err}");
	}

	a = X256::zero();
	a += b;
	show("20: a", &a);
	a += X256::try_from(3_u32)?;
	show("21: a", &a);
	a -= b;
	show("22: a", &a);
	a *= b;
	show("23: a", &a);
	a /= U32::<Wrapping>::try_from(2_u32)?;
	show("24: a", &a);

	Ok(())
}
