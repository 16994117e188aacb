/// Default number of tips returned by a search
pub const DEFAULT_TIP_SEARCH_LIMIT: u32 = 20;

/// Salt length in bytes (hex-encoded to 32 characters)
pub const SALT_BYTES: usize = 16;

/// Name of the private cookie carrying the authenticated email
pub const SESSION_COOKIE: &str = "session";

// =============================================================================
// Development Bootstrap
// =============================================================================

/// Sentinel account created when `SEED_DEFAULT_ADMIN` is enabled.
/// Never enable this outside local development.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "TestPass123";
pub const DEFAULT_ADMIN_NAME: &str = "Admin";

// =============================================================================
// Registration Rules
// =============================================================================

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// =============================================================================
// Error Messages
// =============================================================================

pub const ERR_PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const ERR_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const ERR_PASSWORD_NO_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const ERR_PASSWORD_NO_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const ERR_PASSWORD_NO_DIGIT: &str = "Password must contain at least one digit";
pub const ERR_PASSWORD_NO_SPECIAL: &str =
    "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)";
pub const ERR_INVALID_EMAIL: &str = "Invalid email address";
pub const ERR_NAME_REQUIRED: &str = "Name is required";
