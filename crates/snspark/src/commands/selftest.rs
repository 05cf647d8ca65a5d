//! Self-test command: run the bundled example notifications through the relay

use anyhow::{bail, Result};
use snspark_notify::{Dispatch, Relay, Translation};
use std::path::Path;

use super::load_config;
use crate::fixtures::FIXTURES;
use crate::output::{
    is_json_mode, print_dispatch, print_error, print_info, print_json, print_translation,
    TranslationJson,
};

pub async fn execute(dry_run: bool, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    let relay = if dry_run {
        None
    } else {
        config.validate()?;
        Some(Relay::new(config.clone()))
    };

    if !is_json_mode() {
        print_info(&format!("Running {} example notifications", FIXTURES.len()));
    }

    let mut results: Vec<(&str, Translation, Option<Dispatch>)> = Vec::new();
    let mut failures = 0;

    for (name, text) in FIXTURES {
        let batch: serde_json::Value = serde_json::from_str(text)?;

        let translation = match snspark_notify::translate(&batch, &config) {
            Ok(translation) => translation,
            Err(e) => {
                print_error(&format!("{}: {}", name, e));
                failures += 1;
                continue;
            }
        };

        let dispatch = match &relay {
            Some(relay) => match relay.dispatch(&translation).await {
                Ok(dispatch) => Some(dispatch),
                Err(e) => {
                    print_error(&format!("{}: {}", name, e));
                    failures += 1;
                    continue;
                }
            },
            None => None,
        };

        if !is_json_mode() {
            match dispatch {
                Some(dispatch) => print_dispatch(name, dispatch),
                None => {
                    println!();
                    print_info(name);
                    print_translation(&translation);
                }
            }
        }

        results.push((*name, translation, dispatch));
    }

    if is_json_mode() {
        let views: Vec<TranslationJson<'_>> = results
            .iter()
            .map(|(name, translation, dispatch)| {
                TranslationJson::new(Some(*name), translation, *dispatch)
            })
            .collect();
        print_json(&views);
    }

    if failures > 0 {
        bail!("{} of {} example notifications failed", failures, FIXTURES.len());
    }

    Ok(())
}
