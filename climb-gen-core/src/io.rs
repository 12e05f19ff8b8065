use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Serialize;

/// Reads a whole text file into memory.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Writes `value` as pretty-printed JSON, creating parent directories as needed.
pub fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> crate::error::Result<()> {
	let path = path.as_ref();
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent)?;
	}
	let mut writer = BufWriter::new(File::create(path)?);
	serde_json::to_writer_pretty(&mut writer, value)?;
	writer.write_all(b"\n")?;
	writer.flush()?;
	Ok(())
}

/// Writes a text file, creating parent directories as needed.
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
	let path = path.as_ref();
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent)?;
	}
	fs::write(path, contents)
}

/// Builds a per-item output path by suffixing the file stem with an index.
///
/// Example:
/// `out/route.svg` + `3` → `out/route_3.svg`
pub fn indexed_output_path<P: AsRef<Path>>(path: P, index: usize) -> io::Result<PathBuf> {
	let path = path.as_ref();

	let parent = path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Output path has no filename"))?;

	let mut name = file_stem.to_os_string();
	name.push(format!("_{}", index));

	let mut output = PathBuf::from(parent);
	output.push(name);
	if let Some(extension) = path.extension() {
		output.set_extension(extension);
	}

	Ok(output)
}
