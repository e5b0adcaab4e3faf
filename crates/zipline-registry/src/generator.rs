use zipline_core::ShortCode;

/// Alphabet generated codes are drawn from.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of auto-generated short codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Produces candidate short codes.
///
/// Generators never see the link table, so a candidate may collide with
/// an occupied code. The registry checks uniqueness under its lock and
/// asks again on a collision.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Returns one candidate code.
    fn generate(&self) -> ShortCode;
}

/// Draws uniformly random six-character alphanumeric codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl CodeGenerator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let code: String = (0..GENERATED_CODE_LENGTH)
            .map(|_| {
                let idx = rand::random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();
        ShortCode::new_unchecked(code)
    }
}
