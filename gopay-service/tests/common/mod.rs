use gopay_service::config::GopayConfig;
use gopay_service::startup::Application;
use serde_json::Value;

pub const REGISTERED_PHONE: &str = "081293846571";
pub const UNREGISTERED_PHONE: &str = "000000000000";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Port 0 = random port
        let app = Application::build(GopayConfig::local(0))
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/v1/gopay/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            client,
        }
    }

    pub async fn post_topup(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/v1/gopay/topup", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
