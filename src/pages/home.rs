//! Home page.

use super::{Block, Page, SupplySnapshot, ViewId};
use crate::format::Helpers;

pub(super) fn build(helpers: &Helpers<'_>, supply: &SupplySnapshot) -> Page {
    let mut blocks = Vec::new();

    if helpers.is_local() {
        blocks.push(Block::Notice(
            "Local build: figures below come from the built-in snapshot".to_string(),
        ));
    }

    blocks.push(Block::heading("NAT", None));
    blocks.push(Block::paragraph(
        "A fungible token whose units are mined from bitcoin block data. \
         Every block adds to the supply according to fixed, public rules.",
    ));
    blocks.push(Block::Rule);

    blocks.push(Block::heading("Supply", Some("supply")));
    blocks.push(Block::stat(
        "Max supply",
        helpers.format_number(&supply.max_supply),
    ));
    blocks.push(Block::stat(
        "Remaining",
        helpers.format_number(&supply.remaining),
    ));
    blocks.push(Block::stat(
        "Total available",
        helpers.format_number(helpers.total_available(&supply.max_supply, &supply.remaining)),
    ));
    blocks.push(Block::Rule);

    blocks.push(Block::heading("Fees", Some("fees")));
    blocks.push(Block::stat(
        "Reference fee",
        format!(
            "{} BTC ({} sats)",
            helpers.sats_to_bitcoin(supply.fee_sats),
            helpers.format_number(supply.fee_sats)
        ),
    ));
    blocks.push(Block::Rule);

    blocks.push(Block::heading("Read the paper", Some("paper")));
    blocks.push(Block::paragraph(
        "The full mechanics are described in the NAT paper. Press 2 to open it.",
    ));

    Page {
        title: ViewId::Home.title().to_string(),
        blocks,
    }
}
