/// Hub profile used for the base session when HUB_PROFILE is unset
pub const DEFAULT_HUB_PROFILE: &str = "hub-me";

/// Role assumed in the spoke account when SPOKE_ROLE_NAME is unset
pub const DEFAULT_SPOKE_ROLE_NAME: &str = "SpokeECSRole";

/// AWS region for STS operations when REGION is unset
pub const DEFAULT_REGION: &str = "us-west-2";

/// Prefix for per-call role session names, so assumed sessions are easy to
/// pick out of the spoke account's activity log
pub const SESSION_NAME_PREFIX: &str = "hub-ecs";

/// Profile the assumed credentials are written to unless overridden
pub const DEFAULT_OUTPUT_PROFILE: &str = "spoke";
