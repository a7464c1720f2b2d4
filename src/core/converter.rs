use crate::core::geo_writer::GeoWriter;
use crate::core::{ConversionSummary, ConvertOptions, ElectrodeRecord};
use crate::utils::error::{GeoError, Result};
use std::fs::File;
use crate::utils::validation::validate_distinct_paths;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Converts `input` to `output` with the default view style and no header skipping.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConversionSummary> {
    convert_with(input, output, &ConvertOptions::default())
}

pub fn convert_with<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    // 先開啟輸入檔，確保輸入不存在時不會建立或截斷輸出檔
    let source = File::open(input).map_err(|e| GeoError::from_io(e, input))?;
    tracing::debug!("Opened input file: {}", input.display());

    validate_distinct_paths(input, output)?;

    let sink = File::create(output).map_err(|e| GeoError::from_io(e, output))?;
    tracing::debug!("Writing view script to: {}", output.display());

    let rows_written = convert_stream(source, BufWriter::new(sink), options, input)
        .map_err(|e| match e {
            GeoError::IoError(io_err) => GeoError::from_io(io_err, output),
            other => other,
        })?;

    Ok(ConversionSummary {
        rows_written,
        skipped_header: options.skip_header,
        output_path: output.to_path_buf(),
    })
}

/// Runs the conversion over arbitrary streams. Returns the number of electrodes written.
pub fn convert_reader<R: Read, W: Write>(
    reader: R,
    writer: W,
    options: &ConvertOptions,
) -> Result<usize> {
    convert_stream(reader, writer, options, Path::new("<stream>"))
}

fn convert_stream<R: Read, W: Write>(
    mut reader: R,
    writer: W,
    options: &ConvertOptions,
    source_path: &Path,
) -> Result<usize> {
    let mut input = Vec::new();
    reader
        .read_to_end(&mut input)
        .map_err(|e| GeoError::from_io(e, source_path))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_slice());

    let mut geo = GeoWriter::new(writer);
    geo.begin_view(&options.style)?;

    let mut row = csv::StringRecord::new();
    let mut header_pending = options.skip_header;

    loop {
        // csv 會略過空白行，但空白行是沒有欄位的資料列
        if let Some(line) = blank_line_at(&input, csv_reader.position()) {
            return Err(GeoError::MalformedRow { line, fields: 0 });
        }

        let has_row = csv_reader
            .read_record(&mut row)
            .map_err(|e| GeoError::from_csv(e, source_path))?;
        if !has_row {
            break;
        }

        if header_pending {
            header_pending = false;
            tracing::debug!("Skipping header row: {:?}", row);
            continue;
        }

        let record = ElectrodeRecord::from_row(&row)?;
        tracing::trace!(id = %record.id, name = %record.name, "emitting electrode");
        geo.write_electrode(&record)?;
    }

    let written = geo.points_written();
    geo.finish(&options.style)?;

    Ok(written)
}

/// Returns the line number of an empty line starting at `pos`, if there is one.
/// A record ending in `\r\n` leaves the reader just before the `\n`.
fn blank_line_at(input: &[u8], pos: &csv::Position) -> Option<u64> {
    let mut offset = pos.byte() as usize;
    let mut line = pos.line();

    if offset > 0 && input.get(offset - 1) == Some(&b'\r') && input.get(offset) == Some(&b'\n') {
        offset += 1;
        line += 1;
    }

    match input.get(offset) {
        Some(b'\n') | Some(b'\r') => Some(line),
        _ => None,
    }
}
