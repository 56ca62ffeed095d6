use crate::card::CardView;
use crate::output::traits::{CardOutput, OutputResult};
use std::io::Write;

/// Writes cards as pretty-printed JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonOutput;

impl CardOutput for JsonOutput {
    fn write_card(&self, card: &CardView, writer: &mut dyn Write) -> OutputResult<()> {
        serde_json::to_writer_pretty(&mut *writer, card)?;
        writeln!(writer)?;
        Ok(())
    }
}
