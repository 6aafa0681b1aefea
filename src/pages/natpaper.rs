//! The NAT paper.

use super::{Block, Page, SupplySnapshot, ViewId};
use crate::format::{Helpers, SATS_PER_BITCOIN};

pub(super) fn build(helpers: &Helpers<'_>, supply: &SupplySnapshot) -> Page {
    let mut blocks = vec![
        Block::heading("Abstract", Some("abstract")),
        Block::paragraph(
            "NAT is a token derived from data already committed to the bitcoin \
             blockchain. No new consensus rules are introduced; every unit can be \
             recomputed by anyone running a full node.",
        ),
        Block::heading("Mining", Some("mining")),
        Block::paragraph(
            "Each block contributes units equal to a value read from its header. \
             Claims are made by inscribing a mint that references a block height. \
             The first valid claim for a height wins and later claims are ignored.",
        ),
        Block::paragraph(
            "Because the source value is fixed once a block is mined, issuance is \
             deterministic and independent of who submits the claim.",
        ),
        Block::heading("Supply", Some("supply")),
    ];

    blocks.push(Block::paragraph(&format!(
        "The reference snapshot caps supply at {} units with {} still unclaimed, \
         leaving {} units available. Balances are tracked as arbitrary-precision \
         integers so totals never lose precision.",
        helpers.format_number(&supply.max_supply),
        helpers.format_number(&supply.remaining),
        helpers.format_number(helpers.total_available(&supply.max_supply, &supply.remaining)),
    )));

    blocks.push(Block::heading("Fees", Some("fees")));
    blocks.push(Block::paragraph(&format!(
        "Fees are paid in bitcoin. One bitcoin is {} satoshis, so a {} sat \
         output is {} BTC.",
        helpers.format_number(SATS_PER_BITCOIN),
        helpers.format_number(supply.fee_sats),
        helpers.sats_to_bitcoin(supply.fee_sats),
    )));

    blocks.push(Block::heading("References", Some("references")));
    blocks.push(Block::paragraph(
        "Bitcoin: A Peer-to-Peer Electronic Cash System. Digital Matter Theory. \
         Ordinal inscriptions.",
    ));

    Page {
        title: ViewId::NatPaper.title().to_string(),
        blocks,
    }
}
