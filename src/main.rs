#[tokio::main]
async fn main() {
    reservas_backend::run().await;
}
