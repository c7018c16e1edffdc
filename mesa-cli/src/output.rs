//! Plain-text rendering of screen state

use mesa_client::screens::ReservationRow;
use mesa_client::{Notice, NoticeKind};
use shared::{Reservation, Restaurant};

pub fn notice_line(notice: &Notice) -> String {
    let marker = match notice.kind {
        NoticeKind::Info => "i",
        NoticeKind::Success => "✓",
        NoticeKind::Error => "✗",
    };
    format!("[{marker}] {notice}")
}

/// One line per restaurant: id, name and location
pub fn restaurant_line(r: &Restaurant) -> String {
    format!("#{:<4} {}  ({})", r.id, r.name, r.location())
}

pub fn restaurant_detail(r: &Restaurant) -> String {
    let mut out = format!("#{} {}\n", r.id, r.name);
    out.push_str(&format!("  {}\n", r.description));
    out.push_str(&format!("  {}\n", r.location()));
    if !r.photo_url.is_empty() {
        out.push_str(&format!("  {}\n", r.photo_url));
    }
    if let Some(created) = &r.created_at {
        out.push_str(&format!("  creado: {created}\n"));
    }
    out
}

/// Pending entry with its chip and the cancel button state
pub fn row_line(row: &ReservationRow<'_>) -> String {
    let r = row.reservation;
    format!(
        "#{:<4} [{} · {}] {} a las {}  {}  {} persona(s)  {} <{}> {}  [{}]",
        r.id,
        row.status.label(),
        row.status.tone().color(),
        row.long_date,
        r.time,
        r.restaurant_name.as_deref().unwrap_or("-"),
        r.party_size,
        r.customer_name,
        r.customer_email,
        r.customer_phone,
        row.status.cancel_label(),
    )
}

/// Entry with its persisted lifecycle status
pub fn reservation_line(r: &Reservation) -> String {
    format!(
        "#{:<4} {} {}  {}  {} persona(s)  {}  {}",
        r.id,
        shared::util::format_iso_date(r.date),
        r.time,
        r.restaurant_name.as_deref().unwrap_or("-"),
        r.party_size,
        r.customer_name,
        r.status(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mesa_client::DisplayStatus;

    fn reservation() -> Reservation {
        Reservation {
            id: 12,
            restaurant_id: 1,
            restaurant_name: Some("Botín".into()),
            customer_name: "Ana".into(),
            customer_email: "ana@example.com".into(),
            customer_phone: "600000000".into(),
            date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            time: "21:00".into(),
            party_size: 2,
            completed: false,
            created_at: None,
        }
    }

    #[test]
    fn notice_line_marks_kind() {
        assert_eq!(notice_line(&Notice::error("No se pudo")), "[✗] Error: No se pudo");
        assert_eq!(notice_line(&Notice::success("Hecho")), "[✓] Éxito: Hecho");
    }

    #[test]
    fn expired_row_shows_disabled_cancel() {
        let r = reservation();
        let row = ReservationRow {
            reservation: &r,
            status: DisplayStatus::Expired,
            long_date: shared::util::format_long_date_es(r.date),
            can_cancel: false,
        };
        let line = row_line(&row);
        assert!(line.starts_with("#12"));
        assert!(line.contains("[Hoy · red]"));
        assert!(line.contains("sábado, 17 de octubre de 2026 a las 21:00"));
        assert!(line.ends_with("[Vencida]"));
    }

    #[test]
    fn reservation_line_shows_lifecycle_status() {
        let mut r = reservation();
        r.completed = true;
        let line = reservation_line(&r);
        assert!(line.contains("2026-10-17 21:00"));
        assert!(line.ends_with("completed"));
    }
}
