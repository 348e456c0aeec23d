//! Output formatting module

use renta_app::session::Outcome;
use renta_domain::model::Vehicle;
use renta_types::{OutputFormat, Result};

pub fn render_vehicles(format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }

    println!("\nFleet");
    println!("=====");
    if vehicles.is_empty() {
        println!("(no vehicles)");
    }
    for vehicle in vehicles {
        println!("{}", vehicle);
    }
    Ok(())
}

pub fn render_outcome(format: OutputFormat, outcome: &Outcome) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    match outcome {
        Outcome::Registered { customer_id } => println!("Registered {}.", customer_id),
        Outcome::LoggedIn { name, .. } => println!("Welcome, {}.", name),
        Outcome::Rented { rental } => {
            println!("\nRental Confirmed");
            println!("================");
            println!("Vehicle:  {}", rental.vehicle_id);
            println!("Days:     {}", rental.days);
            println!("Total:    {}", rental.total);
            println!("Date:     {}", rental.rented_at.format("%Y-%m-%d %H:%M:%S UTC"));
        }
        Outcome::Returned { vehicle_id } => println!("Returned {}.", vehicle_id),
        Outcome::NothingToReturn => println!("No rentals to return."),
        Outcome::LoanBalance { balance } => println!("Loan balance: {}", balance),
        Outcome::Transferred {
            to_id,
            amount,
            balance,
        } => println!(
            "Transferred {} to {}. Remaining balance: {}",
            amount, to_id, balance
        ),
        Outcome::History { rentals } => {
            println!("\nRental History");
            println!("==============");
            if rentals.is_empty() {
                println!("(empty)");
            }
            for rental in rentals {
                println!("{}", rental);
            }
        }
        Outcome::HistorySorted { count } => println!("Sorted {} rentals by date.", count),
        Outcome::AccountDeleted => println!("Account deleted."),
        Outcome::LoggedOut => println!("Logged out."),
    }
    Ok(())
}
