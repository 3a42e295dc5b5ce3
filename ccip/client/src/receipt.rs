use {
    crate::{TxReceipt, bindings::IEVM2AnyOnRamp::CCIPMessageSent},
    alloy::sol_types::SolEvent,
    ccip_types::{Address, SendResult},
    tracing::warn,
};

/// Recovers the message ID, sequence number and destination selector from
/// the on-ramp's `CCIPMessageSent` event in a confirmed send transaction.
///
/// With `on_ramp` given, only logs emitted by that contract are considered,
/// so an event of the same signature raised by a token hook or a pool
/// elsewhere in the transaction is not mistaken for the message's.
///
/// The transaction is final whether or not the event can be decoded, so a
/// missing or undecodable event yields a result that only carries the
/// transaction hash and block number.
pub fn extract_send_result(receipt: &TxReceipt, on_ramp: Option<Address>) -> SendResult {
    let event = receipt
        .logs
        .iter()
        .filter(|log| on_ramp.is_none_or(|on_ramp| log.address == on_ramp))
        .find_map(|log| CCIPMessageSent::decode_log_data(&log.data).ok());

    match event {
        Some(event) => SendResult {
            transaction_hash: receipt.transaction_hash,
            message_id: Some(event.message.header.messageId),
            block_number: receipt.block_number,
            destination_chain_selector: Some(event.destChainSelector.to_string()),
            sequence_number: Some(event.sequenceNumber.to_string()),
        },
        None => {
            warn!(
                tx_hash = %receipt.transaction_hash,
                logs = receipt.logs.len(),
                on_ramp = ?on_ramp,
                "No decodable CCIPMessageSent event in receipt"
            );

            SendResult::without_event(receipt.transaction_hash, receipt.block_number)
        },
    }
}

// ----------------------------------- tests -----------------------------------
