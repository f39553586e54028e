pub mod types;

pub mod utils{
    use crate::types::U256;

    /// Interprets a 32-byte array as a little-endian 256-bit number.
    pub fn as_u256(arr: &[u8; 32]) -> U256{
        let mut result:U256 = U256::zero();
        let mut shift:u16 = 0;

        for idx in 0..arr.len(){
            result += U256::from(arr[idx]) << shift;
            shift += 8;
        }

        return result;
    }
}
