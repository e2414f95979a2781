use clap::{Parser, Subcommand, ValueEnum};

use shared_models::auth::Role;

#[derive(Parser, Debug)]
#[command(name = "medibook", about = "Book and manage doctor appointments")]
pub struct Cli {
    /// Overrides MEDIBOOK_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RoleArg {
    Patient,
    Doctor,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Patient => Role::Patient,
            RoleArg::Doctor => Role::Doctor,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SortArg {
    #[default]
    None,
    Name,
    Experience,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and remember the session
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account; complete it with patient-profile or doctor-profile
    Register {
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_enum)]
        role: RoleArg,
    },
    Logout,
    PatientProfile {
        #[arg(long)]
        age: u32,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        address: String,
    },
    DoctorProfile {
        #[arg(long)]
        specialization: String,
        #[arg(long)]
        experience: u32,
        #[arg(long)]
        qualification: String,
        #[arg(long)]
        address: String,
    },
    /// List doctors, optionally refined or replaced by a recommendation
    Doctors {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        specialization: String,
        #[arg(long, value_enum, default_value_t = SortArg::None)]
        sort: SortArg,
        /// Ask for doctors matching these symptoms instead
        #[arg(long)]
        symptoms: Option<String>,
    },
    /// Show one doctor with their feedback
    Doctor { user_id: i64 },
    Book {
        doctor_id: i64,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        time: String,
        #[arg(long)]
        reason: String,
    },
    /// Patient dashboard
    Appointments,
    Cancel { appointment_id: i64 },
    Feedback {
        appointment_id: i64,
        text: String,
    },
    /// Doctor dashboard
    Schedule,
    Complete { appointment_id: i64 },
    DoctorCancel { appointment_id: i64 },
    /// Chat with the virtual assistant until `exit` or end of input
    Chat,
}
