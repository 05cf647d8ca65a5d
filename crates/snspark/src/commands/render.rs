//! Render command

use anyhow::Result;
use std::path::Path;

use super::{load_config, read_batch};
use crate::output::{is_json_mode, print_json, print_translation, TranslationJson};

pub fn execute(input: &str, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let batch = read_batch(input)?;
    let translation = snspark_notify::translate(&batch, &config)?;

    if is_json_mode() {
        print_json(&TranslationJson::new(None, &translation, None));
    } else {
        print_translation(&translation);
    }

    Ok(())
}
