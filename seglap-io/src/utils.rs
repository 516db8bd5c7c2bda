use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Stdout, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::error::Result;

/// Path value meaning stdin for readers and stdout for writers.
pub const STDIO_PATH: &str = "-";

pub fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Get a reader for a file path, or for stdin when the path is `-`.
///
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == STDIO_PATH {
        Ok(BufReader::new(Box::new(io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// A file or stdout writer, gzip-compressing when asked to.
///
/// Dropping the writer does not report errors. Call [DynamicWriter::finish]
/// once everything is written: it writes the gzip trailer and flushes all
/// buffers.
///
pub enum DynamicWriter {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
    Stdout(BufWriter<Stdout>),
}

impl DynamicWriter {
    pub fn finish(self) -> Result<()> {
        match self {
            DynamicWriter::Plain(mut file) => file.flush()?,
            DynamicWriter::Gzip(encoder) => encoder.finish()?.flush()?,
            DynamicWriter::Stdout(mut stdout) => stdout.flush()?,
        }
        Ok(())
    }
}

impl Write for DynamicWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DynamicWriter::Plain(file) => file.write(buf),
            DynamicWriter::Gzip(encoder) => encoder.write(buf),
            DynamicWriter::Stdout(stdout) => stdout.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DynamicWriter::Plain(file) => file.flush(),
            DynamicWriter::Gzip(encoder) => encoder.flush(),
            DynamicWriter::Stdout(stdout) => stdout.flush(),
        }
    }
}

///
/// Get a writer for a file, gzip-compressing when the path ends in `.gz`.
///
/// Parent directories are created as needed.
///
pub fn get_dynamic_writer(path: &Path) -> Result<DynamicWriter> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = BufWriter::new(File::create(path)?);
    let writer = match is_gzipped(path) {
        true => DynamicWriter::Gzip(GzEncoder::new(file, Compression::default())),
        false => DynamicWriter::Plain(file),
    };

    Ok(writer)
}

///
/// Get a writer for a file path, or for stdout when the path is `-`.
///
pub fn get_dynamic_writer_w_stdout(file_path_str: &str) -> Result<DynamicWriter> {
    if file_path_str == STDIO_PATH {
        Ok(DynamicWriter::Stdout(BufWriter::new(io::stdout())))
    } else {
        get_dynamic_writer(Path::new(file_path_str))
    }
}
