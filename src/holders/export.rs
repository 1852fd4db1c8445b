use std::{fs::File, path::Path};

use anyhow::{anyhow, Result};

use super::HolderSet;

/// Default output file name.
pub const CSV_FILENAME: &str = "token_holders.csv";

/// Serializes the holder set to CSV text, header row first, one
/// `address,balance` row per record in encounter order.
pub fn holders_csv(holders: &HolderSet) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_rows(&mut writer, holders)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("finishing csv buffer: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes the holder set as CSV to the given path.
pub fn write_holders_csv(holders: &HolderSet, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_writer(File::create(path)?);
    write_rows(&mut writer, holders)?;
    // A CSV writer maintains an internal buffer, so it's important
    // to flush the buffer when you're done.
    writer.flush()?;
    Ok(())
}

fn write_rows<W: std::io::Write>(writer: &mut csv::Writer<W>, holders: &HolderSet) -> Result<()> {
    writer.write_record(["Address", "Balance"])?;
    for holder in holders.iter() {
        writer.write_record([holder.address.as_str(), holder.balance.as_str()])?;
    }
    Ok(())
}
