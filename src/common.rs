use solana_sdk::pubkey::Pubkey;

pub const PUBKEY_LEN: usize = 32;

// Чтение Pubkey (32 байта). Длину data проверяет вызывающий код
pub fn read_pubkey(data: &[u8], offset: usize) -> Pubkey {
    let mut bytes = [0u8; PUBKEY_LEN];
    bytes.copy_from_slice(&data[offset..offset + PUBKEY_LEN]);
    Pubkey::new_from_array(bytes)
}
