use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create an account and log in
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Log in with username or email
    Login {
        /// Username or email
        #[arg(long)]
        identifier: String,
        #[arg(long)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Resolve a page through the access guards
    Navigate {
        /// home, login, register, enrollment, auth-test or dashboard
        page: String,
    },

    /// Record and save signature samples with the simulated camera
    Enroll {
        /// Samples to save this run (default: until enrollment completes)
        #[arg(long)]
        takes: Option<usize>,

        /// Simulated gesture length per sample, in milliseconds
        #[arg(long, default_value_t = 0)]
        hold_ms: u64,
    },

    /// Run one simulated gesture authentication
    Authenticate,

    /// Show the dashboard for the current session
    Dashboard,

    /// Show session and enrollment progress
    Status,
}
