use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use rollbook_api::ApiClient;
use rollbook_cli::seeder::{self, SeedConfig, StructurePlan};
use rollbook_config::{ApiConfig, SessionConfig};

#[derive(Parser)]
#[command(name = "rollbook-cli")]
#[command(about = "Rollbook CLI - seeding tools for the rollbook backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed grades, houses, students, and teachers
    Seed {
        /// Number of grades in the ladder
        #[arg(long, default_value = "10")]
        grades: usize,

        /// Number of houses
        #[arg(long, default_value = "4")]
        houses: usize,

        /// Number of students per grade
        #[arg(long, default_value = "25")]
        students: usize,

        /// Number of teachers
        #[arg(long, default_value = "12")]
        teachers: usize,
    },
    /// Seed only the structure (grades and houses)
    SeedStructure {
        #[arg(long, default_value = "10")]
        grades: usize,

        #[arg(long, default_value = "4")]
        houses: usize,
    },
    /// Seed only teachers
    SeedStaff {
        #[arg(long, default_value = "12")]
        teachers: usize,
    },
    /// Delete every student from the backend
    ClearStudents {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api = match ApiClient::new(&ApiConfig::from_env(), &SessionConfig::from_env()) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("❌ {}", e.user_message());
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Seed {
            grades,
            houses,
            students,
            teachers,
        } => {
            let config = SeedConfig {
                structure: StructurePlan { grades, houses },
                students_per_grade: students,
                teachers,
            };
            seeder::seed_all(&api, &config).await
        }
        Commands::SeedStructure { grades, houses } => async {
            let grade_ids = seeder::structure::seed_grades(&api, grades).await?;
            let house_ids = seeder::structure::seed_houses(&api, houses).await?;
            println!(
                "✅ Structure ready: {} grades, {} houses",
                grade_ids.len(),
                house_ids.len()
            );
            Ok(())
        }
        .await,
        Commands::SeedStaff { teachers } => seeder::staff::seed_teachers(&api, teachers)
            .await
            .map(|_| ()),
        Commands::ClearStudents { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Delete every student from the backend?")
                    .default(false)
                    .interact()
                    .unwrap_or(false);

            if confirmed {
                seeder::clear_students(&api).await.map(|_| ())
            } else {
                println!("Aborted.");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e.user_message());
        std::process::exit(1);
    }
}
