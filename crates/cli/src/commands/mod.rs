pub(crate) mod catalog;
pub(crate) mod names;
pub(crate) mod schema;

use anyhow::Result;
use serde::Serialize;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
