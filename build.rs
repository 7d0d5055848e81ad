const MIN_BASE: usize = 2;
const MAX_BASE: usize = 36;
const SMALL_PRIME_LIMIT: usize = 255;
const DEFAULT_MAX_LOCAL_BYTES: usize = 256;
const MAX_LOCAL_BYTES_ENV: &str = "LIMBINT_MAX_LOCAL_BYTES";

fn max_local_bytes() -> usize {
	match std::env::var(MAX_LOCAL_BYTES_ENV) {
		Ok(value) => match value.trim().parse::<usize>() {
			Ok(n) => n,
			Err(_) => {
				println!(
					"cargo:warning={} is not a number ({:?}), using {}",
					MAX_LOCAL_BYTES_ENV, value, DEFAULT_MAX_LOCAL_BYTES
				);
				DEFAULT_MAX_LOCAL_BYTES
			},
		},
		Err(_) => DEFAULT_MAX_LOCAL_BYTES,
	}
}

fn digit_values() -> String {
	let mut mapping = [0xFF_u8; 256];
	for i in b'0'..=b'9' {
		mapping[i as usize] = i - b'0';
	}
	for i in b'A'..=b'Z' {
		mapping[i as usize] = i - b'A' + 10;
	}
	for i in b'a'..=b'z' {
		mapping[i as usize] = i - b'a' + 10;
	}
	mapping[b'_' as usize] = 0xFE;

	let mut out = String::new();
	out.push_str("// DIGIT_VALUES maps an ASCII byte to its digit value for bases 2 ..= 36.\n");
	out.push_str("// 0xFF marks an invalid byte, 0xFE a digit separator.\n");
	out.push_str("pub const DIGIT_VALUES: [u8; 256] = [\n");
	for i in 0..16 {
		let mut line = String::new();
		for j in 0..16 {
			line.push_str(&format!("{:#04x},", mapping[i * 16 + j]));
		}
		out.push_str(&format!("\t{}\n", line));
	}
	out.push_str("];\n");
	out
}

fn small_primes() -> String {
	let mut sieve = vec![true; SMALL_PRIME_LIMIT + 1];
	sieve[0] = false;
	sieve[1] = false;
	let mut i = 2;
	while i * i <= SMALL_PRIME_LIMIT {
		if sieve[i] {
			let mut j = i * i;
			while j <= SMALL_PRIME_LIMIT {
				sieve[j] = false;
				j += i;
			}
		}
		i += 1;
	}
	let primes: Vec<usize> = (0..=SMALL_PRIME_LIMIT).filter(|&n| sieve[n]).collect();

	let mut out = String::new();
	out.push_str(&format!("pub const SMALL_PRIMES: [u8; {}] = [\n", primes.len()));
	for chunk in primes.chunks(16) {
		let line: Vec<String> = chunk.iter().map(|p| format!("{},", p)).collect();
		out.push_str(&format!("\t{}\n", line.join(" ")));
	}
	out.push_str("];\n");
	out
}

fn tables() -> String {
	let mut tables = String::new();
	tables.push_str("// Generated by build.rs\n\n");
	tables.push_str(&format!("pub const MIN_BASE: u32 = {};\n", MIN_BASE));
	tables.push_str(&format!("pub const MAX_BASE: u32 = {};\n", MAX_BASE));
	tables.push_str(&format!("pub const MAX_LOCAL_BYTES: usize = {};\n\n", max_local_bytes()));
	tables.push_str(&digit_values());
	tables.push('\n');
	tables.push_str(&small_primes());
	tables
}

fn main() {
	println!("cargo:rerun-if-changed=build.rs");
	println!("cargo:rerun-if-env-changed={}", MAX_LOCAL_BYTES_ENV);

	let tables = tables();

	// Only touch the file when the content changes so dependents are not rebuilt.
	let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
	let path = std::path::Path::new(&out_dir).join("tables_gen.rs");
	if let Ok(content) = std::fs::read_to_string(&path) {
		if content != tables {
			std::fs::write(&path, tables).unwrap();
		}
	} else {
		std::fs::write(&path, tables).unwrap();
	}
}
