use std::collections::HashMap;
use std::io::BufRead;
use ethabi::Address;
use parking_lot::Mutex;
use crate::Error;
use crate::eth::UnsignedTransaction;

/// Turns an unsigned transaction into raw bytes ready for submission.
pub trait TxSigner: Send + Sync {
    /// Whether a credential for `address` is available. Checked before any network access.
    fn can_sign(&self, address: &Address) -> bool;

    /// Signs on behalf of `tx.from`.
    fn sign(&self, tx: &UnsignedTransaction) -> Result<Vec<u8>, Error>;
}

/// Passphrase-gated key material, e.g. an encrypted keystore directory.
pub trait Keystore: Send + Sync {
    fn sign_with_passphrase(&self, tx: &UnsignedTransaction, passphrase: &str) -> Result<Vec<u8>, Error>;
}

/// Keeps passphrases in memory for the lifetime of the signer and hands them to a `Keystore`.
pub struct KeystoreSigner<K> {
    keystore: K,
    passphrases: Mutex<HashMap<Address, String>>,
}

impl<K: Keystore> KeystoreSigner<K> {
    pub fn new(keystore: K) -> Self {
        Self {
            keystore,
            passphrases: Mutex::new(HashMap::new()),
        }
    }

    pub fn keystore(&self) -> &K {
        &self.keystore
    }

    pub fn set_passphrase_for(&self, address: Address, passphrase: &str) {
        self.passphrases.lock().insert(address, passphrase.to_string());
    }

    /// Reads one line from `input` and registers it as the passphrase of `address`.
    ///
    /// The line is taken as typed, so the caller must supply a reader that does
    /// not echo, e.g. a terminal with echo turned off. End of input leaves
    /// `address` without a passphrase and returns `CredentialMissing`.
    pub fn ask_passphrase_for<R: BufRead>(&self, address: Address, input: &mut R) -> Result<(), Error> {
        log::info!("Passphrase for {}:", address);

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::CredentialMissing(address));
        }
        let passphrase = line.trim_end_matches(|c| c == '\r' || c == '\n');
        self.set_passphrase_for(address, passphrase);
        Ok(())
    }

    pub fn forget(&self, address: &Address) -> bool {
        self.passphrases.lock().remove(address).is_some()
    }
}

impl<K: Keystore> TxSigner for KeystoreSigner<K> {
    fn can_sign(&self, address: &Address) -> bool {
        self.passphrases.lock().contains_key(address)
    }

    fn sign(&self, tx: &UnsignedTransaction) -> Result<Vec<u8>, Error> {
        let passphrase = self.passphrases.lock()
            .get(&tx.from)
            .cloned()
            .ok_or(Error::CredentialMissing(tx.from))?;
        self.keystore.sign_with_passphrase(tx, &passphrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::eth::testing::{self, FakeKeystore};

    #[test]
    fn signs_only_registered_senders() {
        let signer = KeystoreSigner::new(FakeKeystore::default());
        let tx = testing::unsigned_tx(testing::SENDER);

        assert!(!signer.can_sign(&testing::SENDER));
        assert!(matches!(signer.sign(&tx), Err(Error::CredentialMissing(address)) if address == testing::SENDER));

        signer.set_passphrase_for(testing::SENDER, "hunter2");
        assert!(signer.can_sign(&testing::SENDER));
        assert!(!signer.can_sign(&testing::CONTRACT));
        assert!(!signer.sign(&tx).unwrap().is_empty());
        assert_eq!(signer.keystore().last_passphrase().as_deref(), Some("hunter2"));
    }

    #[test]
    fn independent_signers_do_not_share_passphrases() {
        let first = KeystoreSigner::new(FakeKeystore::default());
        let second = KeystoreSigner::new(FakeKeystore::default());

        first.set_passphrase_for(testing::SENDER, "one");
        assert!(first.can_sign(&testing::SENDER));
        assert!(!second.can_sign(&testing::SENDER));
    }

    #[test]
    fn asks_passphrase_from_reader() {
        let signer = KeystoreSigner::new(FakeKeystore::default());
        let mut input = Cursor::new("correct horse\r\nignored\n");

        signer.ask_passphrase_for(testing::SENDER, &mut input).unwrap();
        signer.sign(&testing::unsigned_tx(testing::SENDER)).unwrap();
        assert_eq!(signer.keystore().last_passphrase().as_deref(), Some("correct horse"));

        let mut empty = Cursor::new("");
        assert!(matches!(
            signer.ask_passphrase_for(testing::CONTRACT, &mut empty),
            Err(Error::CredentialMissing(_))
        ));
        assert!(!signer.can_sign(&testing::CONTRACT));
    }

    #[test]
    fn forgets_passphrase() {
        let signer = KeystoreSigner::new(FakeKeystore::default());
        signer.set_passphrase_for(testing::SENDER, "hunter2");

        assert!(signer.forget(&testing::SENDER));
        assert!(!signer.forget(&testing::SENDER));
        assert!(!signer.can_sign(&testing::SENDER));
    }

    #[test]
    fn keystore_failure_is_propagated() {
        let signer = KeystoreSigner::new(FakeKeystore::rejecting());
        signer.set_passphrase_for(testing::SENDER, "wrong");

        assert!(matches!(
            signer.sign(&testing::unsigned_tx(testing::SENDER)),
            Err(Error::Signing { .. })
        ));
    }
}
