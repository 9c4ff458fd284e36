#[tokio::main]
async fn main() {
    clinical_copilot::run()
        .await
        .expect("error while running clinical-copilot");
}
