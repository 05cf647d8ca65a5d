//! Send command

use anyhow::{bail, Result};
use snspark_notify::Relay;
use std::path::Path;

use super::{load_config, read_batch};
use crate::output::{is_json_mode, print_dispatch, print_json, TranslationJson};

pub async fn execute(input: &str, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    config.validate()?;

    let relay = Relay::new(config);
    if !relay.is_configured() {
        bail!("Webex delivery is not configured");
    }

    let batch = read_batch(input)?;
    let translation = relay.translate(&batch)?;
    let dispatch = relay.dispatch(&translation).await?;

    if is_json_mode() {
        print_json(&TranslationJson::new(Some(input), &translation, Some(dispatch)));
    } else {
        print_dispatch(input, dispatch);
    }

    Ok(())
}
