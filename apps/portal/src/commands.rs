use std::io::Write;

use anyhow::{anyhow, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use appointment_cell::{
    AppointmentService, BookingForm, BookingService, DoctorDashboard, PatientDashboard,
};
use assistant_cell::{AssistantService, Conversation};
use auth_cell::guard::{self, Navigation};
use auth_cell::models::{DoctorProfileForm, PatientProfileForm};
use auth_cell::{AuthService, FileSessionStore, ProfileService, Route, SessionContext};
use doctor_cell::{
    recommendation_failure_message, DoctorDirectory, DoctorRecord, DoctorService, SortOption,
};
use shared_config::AppConfig;
use shared_models::auth::{LoginCredentials, RegisterRequest};
use shared_models::error::AppError;
use shared_utils::format::{capitalize, doctor_display_name, format_datetime};

use crate::cli::{Command, SortArg};

/// Turns an API failure into the message the user sees.
fn fail(err: AppError, fallback: &str) -> anyhow::Error {
    anyhow!(err.user_message(fallback))
}

/// The view each command belongs to. The guard decides whether it may run.
fn route_for(command: &Command) -> Route {
    match command {
        Command::Login { .. } | Command::Logout => Route::Login,
        Command::Register { .. } => Route::Register,
        Command::PatientProfile { .. } => Route::PatientProfile,
        Command::DoctorProfile { .. } => Route::DoctorProfile,
        Command::Doctors { .. } | Command::Doctor { .. } | Command::Chat => Route::Main,
        Command::Book { doctor_id, .. } => Route::Booking {
            doctor_id: *doctor_id,
        },
        Command::Appointments | Command::Cancel { .. } | Command::Feedback { .. } => {
            Route::PatientDashboard
        }
        Command::Schedule | Command::Complete { .. } | Command::DoctorCancel { .. } => {
            Route::DoctorDashboard
        }
    }
}

impl From<SortArg> for SortOption {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::None => SortOption::None,
            SortArg::Name => SortOption::Name,
            SortArg::Experience => SortOption::Experience,
        }
    }
}

pub struct Portal {
    config: AppConfig,
    session: SessionContext<FileSessionStore>,
}

impl Portal {
    pub fn open(config: AppConfig) -> Result<Self> {
        let store = FileSessionStore::new(config.session_file.clone());
        let session = SessionContext::load(store)
            .map_err(|e| fail(e, "Could not read the saved session."))?;

        Ok(Self { config, session })
    }

    fn token(&self) -> Result<String> {
        self.session
            .token()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("You need to sign in first."))
    }

    pub async fn run(&mut self, command: Command) -> Result<()> {
        let requested = route_for(&command);
        if let Navigation::Redirect(target) = guard::resolve(self.session.session(), requested.clone()) {
            println!("Redirected to {}", target);
            return Ok(());
        }
        debug!("Rendering {}", requested);

        match command {
            Command::Login { username, password } => self.login(username, password).await,
            Command::Register {
                username,
                email,
                password,
                role,
            } => {
                let request = RegisterRequest {
                    username,
                    email,
                    password,
                    role: role.into(),
                };
                let next = self
                    .session
                    .register(&AuthService::new(&self.config), &request)
                    .await
                    .map_err(|e| fail(e, "Registration failed"))?;
                println!("Account created. Complete your profile with `medibook {}`", &next.path()[1..]);
                Ok(())
            }
            Command::Logout => {
                let next = self
                    .session
                    .logout()
                    .map_err(|e| fail(e, "Could not clear the saved session."))?;
                println!("Signed out. Continue at {}", next);
                Ok(())
            }
            Command::PatientProfile {
                age,
                gender,
                address,
            } => {
                let form = PatientProfileForm {
                    age,
                    gender,
                    address,
                };
                let next = ProfileService::new(&self.config)
                    .submit_patient_profile(self.session.registered_user_id(), &form)
                    .await
                    .map_err(|e| fail(e, "Failed to save patient profile."))?;
                println!("Profile saved. Continue at {}", next);
                Ok(())
            }
            Command::DoctorProfile {
                specialization,
                experience,
                qualification,
                address,
            } => {
                let form = DoctorProfileForm {
                    specialization,
                    experience,
                    qualification,
                    address,
                };
                let next = ProfileService::new(&self.config)
                    .submit_doctor_profile(self.session.registered_user_id(), &form)
                    .await
                    .map_err(|e| fail(e, "Failed to save doctor profile."))?;
                println!("Profile saved. Continue at {}", next);
                Ok(())
            }
            Command::Doctors {
                search,
                specialization,
                sort,
                symptoms,
            } => self.doctors(search, specialization, sort.into(), symptoms).await,
            Command::Doctor { user_id } => {
                let detail = DoctorService::new(&self.config)
                    .get_detail(user_id)
                    .await
                    .map_err(|e| fail(e, "Failed to load doctor details."))?;

                print_doctor(&detail.doctor);
                if let Some(qualification) = &detail.doctor.qualification {
                    println!("  Qualification: {}", qualification);
                }
                if detail.feedbacks.is_empty() {
                    println!("  No feedback yet.");
                } else {
                    println!("  Feedback:");
                    for feedback in &detail.feedbacks {
                        println!("    - {}", feedback.feedback);
                    }
                }
                Ok(())
            }
            Command::Book {
                doctor_id,
                date,
                time,
                reason,
            } => {
                let token = self.token()?;
                let form = BookingForm { date, time, reason };
                let today = chrono::Local::now().date_naive();
                let booked = BookingService::new(&self.config)
                    .book(&token, doctor_id, &form, today)
                    .await
                    .map_err(|e| fail(e, "Failed to book appointment."))?;
                println!(
                    "Appointment booked for {}. Continue at {}",
                    format_datetime(&booked.appointment_datetime),
                    Route::PatientDashboard
                );
                Ok(())
            }
            Command::Appointments => {
                let token = self.token()?;
                let service = AppointmentService::new(&self.config);
                let mut dashboard = PatientDashboard::new();
                dashboard
                    .load(&service, &token)
                    .await
                    .map_err(|e| fail(e, "Failed to load appointments."))?;
                print_patient_dashboard(&dashboard);
                Ok(())
            }
            Command::Cancel { appointment_id } => {
                let token = self.token()?;
                let service = AppointmentService::new(&self.config);
                let mut dashboard = PatientDashboard::new();
                dashboard
                    .load(&service, &token)
                    .await
                    .map_err(|e| fail(e, "Failed to load appointments."))?;
                dashboard
                    .cancel(&service, &token, appointment_id)
                    .await
                    .map_err(|e| fail(e, "Failed to cancel appointment."))?;
                print_patient_dashboard(&dashboard);
                Ok(())
            }
            Command::Feedback {
                appointment_id,
                text,
            } => {
                let token = self.token()?;
                let service = AppointmentService::new(&self.config);
                let mut dashboard = PatientDashboard::new();
                dashboard.set_feedback_draft(appointment_id, text);
                dashboard
                    .submit_feedback(&service, &token, appointment_id)
                    .await
                    .map_err(|e| fail(e, "Failed to submit feedback."))?;
                println!("Feedback submitted. Thank you!");
                Ok(())
            }
            Command::Schedule => {
                let token = self.token()?;
                let service = AppointmentService::new(&self.config);
                let mut dashboard = DoctorDashboard::new();
                dashboard
                    .load(&service, &token)
                    .await
                    .map_err(|e| fail(e, "Failed to load appointments."))?;
                print_doctor_dashboard(&dashboard);
                Ok(())
            }
            Command::Complete { appointment_id } => {
                let token = self.token()?;
                let service = AppointmentService::new(&self.config);
                service
                    .complete(&token, appointment_id)
                    .await
                    .map_err(|e| fail(e, "Failed to mark appointment as completed."))?;
                println!("Appointment {} marked as completed.", appointment_id);
                Ok(())
            }
            Command::DoctorCancel { appointment_id } => {
                let token = self.token()?;
                let service = AppointmentService::new(&self.config);
                service
                    .cancel_as_doctor(&token, appointment_id)
                    .await
                    .map_err(|e| fail(e, "Failed to cancel appointment."))?;
                println!("Appointment {} cancelled.", appointment_id);
                Ok(())
            }
            Command::Chat => self.chat().await,
        }
    }

    async fn login(&mut self, username: String, password: String) -> Result<()> {
        let credentials = LoginCredentials { username, password };
        let next = self
            .session
            .login(&AuthService::new(&self.config), &credentials)
            .await
            .map_err(|e| fail(e, "Login failed"))?;

        if let Some(role) = self.session.role() {
            println!("Signed in as {}. Continue at {}", capitalize(role.as_str()), next);
        }
        Ok(())
    }

    async fn doctors(
        &self,
        search: String,
        specialization: String,
        sort: SortOption,
        symptoms: Option<String>,
    ) -> Result<()> {
        let service = DoctorService::new(&self.config);
        let mut directory = DoctorDirectory::new();
        directory
            .load(&service)
            .await
            .map_err(|e| fail(e, "Failed to load doctors."))?;

        directory.set_search_query(search);
        directory.set_specialization(specialization);
        directory.set_sort(sort);

        if let Some(symptoms) = symptoms {
            if let Err(e) = directory.recommend(&service, &symptoms).await {
                eprintln!("{}", recommendation_failure_message(&e));
            }
        }

        println!("{}", directory.heading());
        if directory.displayed().is_empty() {
            println!("  No doctors found.");
        }
        for doctor in directory.displayed() {
            print_doctor(doctor);
        }
        Ok(())
    }

    async fn chat(&self) -> Result<()> {
        let service = AssistantService::new(&self.config);
        let mut conversation = Conversation::new();
        if let Some(greeting) = conversation.last_reply() {
            println!("{}", greeting.plain_text());
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim() == "exit" {
                break;
            }

            if let Some(reply) = conversation.send(&service, &line).await {
                println!("{}", reply.plain_text());
            }
        }
        Ok(())
    }
}

fn print_doctor(doctor: &DoctorRecord) {
    println!(
        "[{}] {} | {} | {} years | {}",
        doctor.user_id,
        doctor_display_name(&doctor.username),
        doctor.specialization,
        doctor.experience,
        doctor.address
    );
}

fn print_patient_dashboard(dashboard: &PatientDashboard) {
    let appointments = dashboard.appointments();
    let sections = [
        ("Upcoming", &appointments.upcoming),
        ("Past", &appointments.past),
        ("Cancelled", &appointments.cancelled),
    ];

    for (title, entries) in sections {
        println!("{} ({})", title, entries.len());
        for a in entries.iter() {
            println!(
                "  [{}] {} with {}: {}",
                a.id,
                format_datetime(&a.appointment_datetime),
                doctor_display_name(&a.doctor_name),
                a.reason
            );
            if let Some(feedback) = &a.feedback {
                println!("      Feedback: {}", feedback);
            }
        }
    }
}

fn print_doctor_dashboard(dashboard: &DoctorDashboard) {
    let appointments = dashboard.appointments();
    let sections = [
        ("Upcoming", &appointments.upcoming),
        ("Completed", &appointments.completed),
        ("Cancelled", &appointments.cancelled),
    ];

    for (title, entries) in sections {
        println!("{} ({})", title, entries.len());
        for a in entries.iter() {
            println!(
                "  [{}] {} with {}: {}",
                a.id,
                format_datetime(&a.appointment_datetime),
                capitalize(&a.patient_name),
                a.reason
            );
            if let Some(feedback) = &a.feedback {
                println!("      Feedback: {}", feedback);
            }
        }
    }

    println!("Feedback summary");
    println!("  {}", dashboard.feedback_summary());
}
