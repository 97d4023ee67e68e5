use tiny_keccak::{Hasher, Keccak};

pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let mut output = [0; 32];
    let mut hasher = Keccak::v256();
    hasher.update(bytes);
    hasher.finalize(&mut output);
    output
}

/// Function selector: the first four bytes of the signature hash.
pub fn encode_4bytes(signature: &str) -> [u8; 4] {
    let mut output = [0; 4];
    output.copy_from_slice(&keccak256(signature.as_bytes())[..4]);
    output
}

/// Event topic 0: the full signature hash.
pub fn encode_topic(signature: &str) -> [u8; 32] {
    keccak256(signature.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_4bytes() {
        assert_eq!(
            hex::encode(encode_4bytes("balanceOf(address)")),
            "70a08231",
        );
    }

    #[test]
    fn test_encode_topic() {
        assert_eq!(
            hex::encode(encode_topic("Transfer(address,address,uint256)")),
            "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef",
        );
    }
}
