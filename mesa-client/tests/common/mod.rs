#![allow(dead_code)]

use mesa_client::{ClientConfig, NetworkHttpClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub async fn server_and_client() -> (MockServer, NetworkHttpClient) {
    let server = MockServer::start().await;
    let client = ClientConfig::new(format!("{}/api", server.uri()))
        .with_timeout(5)
        .build_http_client()
        .expect("client builds");
    (server, client)
}

pub fn restaurant_json(id: i64, name: &str, description: &str, city: &str) -> Value {
    json!({
        "id": id,
        "nombre": name,
        "descripcion": description,
        "direccion": "Calle Mayor 1",
        "ciudad": city,
        "url_foto": "https://example.com/foto.jpg",
        "fecha_creacion": "2026-01-01T10:00:00"
    })
}

pub fn reservation_json(id: i64, date: &str) -> Value {
    json!({
        "id": id,
        "restaurante_id": 1,
        "restaurante_nombre": "La Tagliatella",
        "nombre_cliente": "Ana",
        "email_cliente": "ana@example.com",
        "telefono_cliente": "600000000",
        "fecha": date,
        "hora": "21:00",
        "numero_personas": 2,
        "fecha_creacion": "2026-10-01T09:00:00",
        "completada": false
    })
}

pub fn ok(data: Value) -> Value {
    json!({ "success": true, "data": data })
}
