use std::io::Error;
use tempfile::NamedTempFile;

pub const HEADER: [&str; 5] = ["product_id", "name", "price", "discount", "quantity"];

/// Writes `rows` under the cart header into a temporary CSV file.
pub fn cart_csv(rows: &[[&str; 5]]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_path(file.path())?;

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(file)
}
