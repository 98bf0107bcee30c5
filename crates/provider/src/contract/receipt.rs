// This file is part of arb-bindings.
//
// arb-bindings is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// arb-bindings is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with arb-bindings.
// If not, see https://www.gnu.org/licenses/.

use std::time::Duration;

use alloy_primitives::TxHash;
use tokio::time;

use crate::{ContractClient, MinedTransaction, ProviderError, ProviderResult};

/// Settings for waiting on a transaction receipt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReceiptSettings {
    /// Delay between receipt polls
    pub poll_interval: Duration,
    /// Give up after this long without a receipt
    pub timeout: Duration,
}

impl Default for ReceiptSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            timeout: Duration::from_secs(120),
        }
    }
}

/// A submitted transaction that may not be mined yet
#[derive(Debug)]
pub struct PendingTransaction<'a, C> {
    client: &'a C,
    tx_hash: TxHash,
}

impl<'a, C: ContractClient> PendingTransaction<'a, C> {
    pub(crate) fn new(client: &'a C, tx_hash: TxHash) -> Self {
        Self { client, tx_hash }
    }

    /// Hash of the submitted transaction
    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Wait until the transaction is mined.
    ///
    /// Errors with [`ProviderError::Reverted`] if the transaction was mined with a failed
    /// status and [`ProviderError::ReceiptTimeout`] if no receipt showed up in time.
    pub async fn get_receipt(self, settings: ReceiptSettings) -> ProviderResult<MinedTransaction> {
        wait_for_receipt(self.client, self.tx_hash, settings).await
    }
}

pub(crate) async fn wait_for_receipt<C: ContractClient + ?Sized>(
    client: &C,
    tx_hash: TxHash,
    settings: ReceiptSettings,
) -> ProviderResult<MinedTransaction> {
    let poll = async {
        loop {
            if let Some(receipt) = client.get_transaction_receipt(tx_hash).await? {
                return Ok::<_, ProviderError>(receipt);
            }
            tracing::trace!("transaction {tx_hash:?} not mined yet");
            time::sleep(settings.poll_interval).await;
        }
    };

    let receipt = time::timeout(settings.timeout, poll)
        .await
        .map_err(|_| ProviderError::ReceiptTimeout(tx_hash))??;
    if !receipt.success {
        return Err(ProviderError::Reverted(tx_hash));
    }
    Ok(receipt)
}
