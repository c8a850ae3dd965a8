//! Handler for the `status` command
//!
//! Lists per-spot occupancy together with the plate parked at each occupied
//! spot.

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::{Spot, SpotId, Ticket};
use crate::error::Result;
use std::collections::HashMap;

pub fn handle_status(free_only: bool, lot_dir: Option<&str>, output: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::new(lot_dir)?;
    let spots = context.engine.list_spots()?;
    let tickets = context.engine.list_tickets()?;

    let plates = plates_by_spot(&tickets);
    let free = spots.iter().filter(|s| s.is_free()).count();

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "total": spots.len(),
            "free": free,
            "occupied": spots.len() - free,
            "spots": spots.iter()
                .filter(|s| !free_only || s.is_free())
                .map(|s| spot_json(s, &plates))
                .collect::<Vec<_>>(),
        }))?;
        return Ok(());
    }

    output.info(&format!(
        "Lot: {} spots, {} free, {} occupied",
        spots.len(),
        free,
        spots.len() - free
    ));
    output.info("");
    for spot in &spots {
        if free_only && !spot.is_free() {
            continue;
        }
        match plates.get(&spot.id) {
            Some(plate) => output.info(&format!("  {:<4} {} ({plate})", spot.code, spot.status)),
            None => output.info(&format!("  {:<4} {}", spot.code, spot.status)),
        }
    }

    Ok(())
}

/// Maps occupied spot ids to the plate of their open ticket
fn plates_by_spot(tickets: &[Ticket]) -> HashMap<SpotId, String> {
    tickets
        .iter()
        .filter(|t| t.is_open())
        .map(|t| (t.spot_id, t.plate.clone()))
        .collect()
}

fn spot_json(spot: &Spot, plates: &HashMap<SpotId, String>) -> serde_json::Value {
    serde_json::json!({
        "id": spot.id,
        "code": spot.code,
        "status": spot.status.to_string(),
        "plate": plates.get(&spot.id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketId;
    use chrono::Utc;

    #[test]
    fn test_plates_by_spot_ignores_closed_tickets() {
        let open = Ticket::new(TicketId(1), "AAA111", SpotId(1), Utc::now());
        let mut closed = Ticket::new(TicketId(2), "BBB222", SpotId(2), Utc::now());
        closed.exit_time = Some(Utc::now());
        closed.amount = Some(1000);

        let plates = plates_by_spot(&[open, closed]);
        assert_eq!(plates.get(&SpotId(1)).map(String::as_str), Some("AAA111"));
        assert!(!plates.contains_key(&SpotId(2)));
    }
}
