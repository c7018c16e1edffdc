//! Subcommand handlers
//!
//! Each handler drives one screen (or one API call) and prints the result.
//! The returned flag is false when the user saw an error.

use mesa_client::api::{ReservationApi, RestaurantApi};
use mesa_client::{
    ClientError, DisplayStatus, NetworkHttpClient, NewReservationScreen, Notice, ReservationsScreen,
    RestaurantFilter, RestaurantsScreen,
};
use shared::RestaurantInput;

use crate::cli::{ReservationCommand, RestaurantCommand, RestaurantFields};
use crate::output;

fn print_notices(notices: &[Notice]) -> bool {
    for notice in notices {
        println!("{}", output::notice_line(notice));
    }
    !notices.iter().any(Notice::is_error)
}

fn report(err: &ClientError) -> bool {
    tracing::error!(error = %err, "request failed");
    print_notices(&[Notice::error(err.to_string())])
}

impl From<RestaurantFields> for RestaurantInput {
    fn from(f: RestaurantFields) -> Self {
        Self {
            name: f.name,
            description: f.description,
            address: f.address,
            city: f.city,
            photo_url: f.photo_url,
        }
    }
}

pub async fn restaurants(http: NetworkHttpClient, command: RestaurantCommand) -> bool {
    match command {
        RestaurantCommand::List {
            query,
            letter,
            city,
        } => {
            let mut screen = RestaurantsScreen::new(http);
            screen.set_filter(RestaurantFilter {
                query,
                letter,
                city,
            });
            screen.load().await;
            let ok = print_notices(&screen.take_notices());
            for r in screen.filtered() {
                println!("{}", output::restaurant_line(r));
            }
            if let Some(text) = screen.empty_text() {
                println!("{text}");
            }
            ok
        }
        RestaurantCommand::Show { id } => match RestaurantApi::new(http).get_by_id(id).await {
            Ok(r) => {
                print!("{}", output::restaurant_detail(&r));
                true
            }
            Err(e) => report(&e),
        },
        RestaurantCommand::Search { letter, city } => {
            match RestaurantApi::new(http).filter(&letter, &city).await {
                Ok(list) => {
                    for r in &list {
                        println!("{}", output::restaurant_line(r));
                    }
                    if list.is_empty() {
                        println!("{}", mesa_client::screens::restaurants::EMPTY_TEXT);
                    }
                    true
                }
                Err(e) => report(&e),
            }
        }
        RestaurantCommand::Create(fields) => {
            let mut screen = RestaurantsScreen::new(http);
            screen.open_editor(None);
            if let Some(editor) = screen.editor_mut() {
                editor.input = fields.into();
            }
            let saved = screen.save().await;
            print_notices(&screen.take_notices()) && saved
        }
        RestaurantCommand::Update { id, fields } => {
            let mut screen = RestaurantsScreen::new(http);
            screen.open_editor(None);
            if let Some(editor) = screen.editor_mut() {
                editor.editing = Some(id);
                editor.input = fields.into();
            }
            let saved = screen.save().await;
            print_notices(&screen.take_notices()) && saved
        }
        RestaurantCommand::Delete { id } => {
            let mut screen = RestaurantsScreen::new(http);
            let deleted = screen.delete(id).await;
            print_notices(&screen.take_notices()) && deleted
        }
    }
}

pub async fn reservations(http: NetworkHttpClient, command: ReservationCommand) -> bool {
    match command {
        ReservationCommand::List => {
            let mut screen = ReservationsScreen::new(http);
            screen.enter().await;
            let ok = print_notices(&screen.take_notices());
            let rows = screen.rows();
            for row in &rows {
                println!("{}", output::row_line(row));
            }
            if rows.is_empty() && ok {
                println!("{}", mesa_client::screens::reservations::EMPTY_TEXT);
                println!("{}", mesa_client::screens::reservations::EMPTY_HINT);
            }
            ok
        }
        ReservationCommand::All => {
            let result = ReservationApi::new(http).get_all().await;
            print_reservations(result)
        }
        ReservationCommand::ForRestaurant { id } => {
            let result = ReservationApi::new(http).get_by_restaurant(id).await;
            print_reservations(result)
        }
        ReservationCommand::Create {
            restaurant,
            name,
            email,
            phone,
            date,
            time,
            party_size,
        } => {
            let mut screen = NewReservationScreen::new(http);
            screen.load_restaurants().await;
            if !screen.select_restaurant(restaurant) {
                tracing::warn!(restaurant, "restaurant not in the picker");
            }

            let form = screen.form_mut();
            form.customer_name = name;
            form.customer_email = email;
            form.customer_phone = phone;
            if let Some(date) = date {
                form.date = date;
            }
            if let Some(time) = time {
                form.time = time;
            }
            if let Some(party_size) = party_size {
                form.party_size = party_size;
            }

            let created = screen.submit().await;
            print_notices(&screen.take_notices()) && created
        }
        ReservationCommand::Cancel { id } => {
            let mut screen = ReservationsScreen::new(http);
            screen.load().await;
            let expired = screen
                .rows()
                .iter()
                .any(|row| row.reservation.id == id && !row.can_cancel);
            if expired {
                println!("#{id}: {}", DisplayStatus::Expired.cancel_label());
            }
            let cancelled = !expired && screen.cancel(id).await;
            print_notices(&screen.take_notices()) && cancelled
        }
        ReservationCommand::Complete { id } => {
            let mut screen = ReservationsScreen::new(http);
            let completed = screen.complete(id).await;
            print_notices(&screen.take_notices()) && completed
        }
        ReservationCommand::PurgeCompleted => {
            let mut screen = ReservationsScreen::new(http);
            let purged = screen.delete_completed().await;
            print_notices(&screen.take_notices()) && purged
        }
        ReservationCommand::MarkExpired => match ReservationApi::new(http).mark_expired().await {
            Ok(count) => {
                println!("{count} reserva(s) marcada(s) como completada(s)");
                true
            }
            Err(e) => report(&e),
        },
    }
}

fn print_reservations(result: mesa_client::ClientResult<Vec<shared::Reservation>>) -> bool {
    match result {
        Ok(list) => {
            for r in &list {
                println!("{}", output::reservation_line(r));
            }
            true
        }
        Err(e) => report(&e),
    }
}
