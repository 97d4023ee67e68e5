use std::path::Path;
use ethabi::num_bigint::BigUint;
use ethabi::{strip_hex, Address};
use crate::Error;
use crate::eth::transaction::submit;
use crate::eth::{Confirmation, SendOptions, Submitted, Transport, TxSigner};

/// Creates a contract from `bytecode` followed by the encoded constructor arguments.
///
/// When waited for, the receipt's `contract_address` holds the new contract.
pub async fn deploy<S: AsRef<str>>(
    transport: &dyn Transport,
    signer: &dyn TxSigner,
    from: &Address,
    bytecode: &[u8],
    constructor: &[&str],
    args: &[S],
    confirmation: Confirmation,
    options: &SendOptions,
) -> Result<Submitted, Error> {
    let codec = ethabi::parse_tuple(constructor).map_err(|error| Error::Spec {
        name: "constructor".to_string(),
        reason: error.to_string(),
    })?;
    let encoded = codec.encode_literals(args).map_err(|error| match error {
        ethabi::Error::Arity { expected, actual } => Error::ArityMismatch {
            name: "constructor".to_string(),
            expected,
            actual,
        },
        source => Error::Encoding {
            method: "constructor".to_string(),
            source,
        },
    })?;

    let data = [bytecode, encoded.as_slice()].concat();
    let submitted = submit(transport, signer, from, None, None, data, confirmation, options).await?;
    if let Some(address) = submitted.receipt.as_ref().and_then(|receipt| receipt.contract_address) {
        log::info!("Contract deployed at {}", address);
    }
    Ok(submitted)
}

/// Plain value transfer with no calldata.
pub async fn send_value(
    transport: &dyn Transport,
    signer: &dyn TxSigner,
    from: &Address,
    to: &Address,
    value: BigUint,
    confirmation: Confirmation,
    options: &SendOptions,
) -> Result<Submitted, Error> {
    log::info!("Sending {} wei from {} to {}", value, from, to);
    submit(transport, signer, from, Some(to), Some(value), Vec::new(), confirmation, options).await
}

/// Reads a file of hex text, e.g. compiled bytecode. Surrounding whitespace and `0x` are ignored.
pub fn read_hex_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
    let text = std::fs::read_to_string(path)?;
    Ok(hex::decode(strip_hex(text.trim()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::eth::testing::{self, MockTransport};
    use crate::eth::TxStatus;

    #[tokio::test]
    async fn deploy_has_no_recipient() {
        let mut receipt = testing::receipt(TxStatus::Success, vec![]);
        receipt.contract_address = Some(testing::CONTRACT);
        let transport = MockTransport::new().with_receipt_after(1, receipt);
        let signer = testing::signer_for(testing::SENDER);

        let submitted = deploy(
            &transport, &signer, &testing::SENDER, &[0x60, 0x80], &["uint256"], &["1"],
            Confirmation::Wait(Duration::from_secs(1)), &SendOptions::default(),
        ).await.unwrap();
        assert_eq!(submitted.receipt.unwrap().contract_address, Some(testing::CONTRACT));

        let tx = signer.keystore().last_signed().unwrap();
        assert_eq!(tx.to, None);
        assert_eq!(tx.data, [vec![0x60, 0x80], testing::word(1)].concat());
    }

    #[tokio::test]
    async fn deploy_checks_constructor_arity() {
        let transport = MockTransport::new();
        let signer = testing::signer_for(testing::SENDER);

        let result = deploy::<&str>(
            &transport, &signer, &testing::SENDER, &[0x60], &["address"], &[],
            Confirmation::Submit, &SendOptions::default(),
        ).await;
        assert!(matches!(result, Err(Error::ArityMismatch { .. })));
        assert_eq!(transport.requests(), 0);
    }

    #[tokio::test]
    async fn send_value_carries_value_only() {
        let transport = MockTransport::new();
        let signer = testing::signer_for(testing::SENDER);

        send_value(
            &transport, &signer, &testing::SENDER, &testing::CONTRACT, 1_000_u32.into(),
            Confirmation::Submit, &SendOptions::default(),
        ).await.unwrap();

        let tx = signer.keystore().last_signed().unwrap();
        assert_eq!(tx.to, Some(testing::CONTRACT));
        assert_eq!(tx.value, BigUint::from(1_000_u32));
        assert!(tx.data.is_empty());
    }

    #[test]
    fn reads_hex_file() {
        let path = std::env::temp_dir().join(format!("contracts-bytecode-{}.hex", std::process::id()));
        std::fs::write(&path, "0x6080604052\n").unwrap();
        let bytes = read_hex_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(bytes.unwrap(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);

        assert!(matches!(read_hex_file(path), Err(Error::Io(_))));
    }
}
