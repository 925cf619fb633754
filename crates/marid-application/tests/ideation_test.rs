use async_trait::async_trait;
use marid_application::{MaridGenerationClient, MindMapWorkflow, ScamperService, SimulatedMetrics};
use marid_core::error::BackendError;
use marid_core::generation::{AiBackend, ImageGenerationRequest, TextGenerationRequest};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Replies to every text request with the same body.
struct FixedBackend {
    reply: Mutex<String>,
}

impl FixedBackend {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(reply.to_string()),
        })
    }

    fn set(&self, reply: &str) {
        *self.reply.lock().unwrap() = reply.to_string();
    }
}

#[async_trait]
impl AiBackend for FixedBackend {
    async fn generate_text(
        &self,
        _request: TextGenerationRequest,
    ) -> Result<String, BackendError> {
        Ok(self.reply.lock().unwrap().clone())
    }

    async fn generate_image(
        &self,
        _request: ImageGenerationRequest,
    ) -> Result<String, BackendError> {
        Err(BackendError::Other("no images here".into()))
    }
}

fn client(backend: Arc<FixedBackend>) -> Arc<MaridGenerationClient> {
    let metrics = SimulatedMetrics::seeded(1).with_latency(Duration::ZERO);
    Arc::new(MaridGenerationClient::new(backend, Arc::new(metrics)))
}

const FIELDS: [(&str, &str); 7] = [
    ("substitute", "S"),
    ("combine", "C"),
    ("adapt", "A"),
    ("modify", "M"),
    ("put_to_another_use", "P"),
    ("eliminate", "E"),
    ("reverse", "R"),
];

#[tokio::test]
async fn scamper_order_ignores_reply_key_order() {
    let orders: [[usize; 7]; 3] = [
        [6, 5, 4, 3, 2, 1, 0],
        [3, 0, 6, 1, 5, 2, 4],
        [1, 2, 3, 4, 5, 6, 0],
    ];

    for order in orders {
        let body = order
            .iter()
            .map(|&i| format!("\"{}\": \"idea-{}\"", FIELDS[i].0, FIELDS[i].1))
            .collect::<Vec<_>>()
            .join(", ");
        let service = ScamperService::new(client(FixedBackend::new(&format!("{{{body}}}"))));

        let suggestions = service.generate("جرّبها اليوم").await.unwrap();

        let letters: Vec<&str> = suggestions.iter().map(|s| s.letter.as_str()).collect();
        assert_eq!(letters, vec!["S", "C", "A", "M", "P", "E", "R"]);
        for suggestion in &suggestions {
            assert_eq!(suggestion.idea, format!("idea-{}", suggestion.letter));
        }
    }
}

#[tokio::test]
async fn mind_map_expansion_is_single_shot_per_node() {
    let backend = FixedBackend::new(r#"{"sub_topics": ["محور أ", "محور ب"]}"#);
    let workflow = MindMapWorkflow::new(client(backend.clone()));
    let root = workflow.generate_map("مقهى مختص", None).await.unwrap();

    backend.set("```json\n{\"ideas\": [\"فكرة 1\", \"فكرة 2\", \"فكرة 3\"]}\n```");
    let target = root.children[0].id.clone();
    let updated = workflow.expand_node(&target).await.unwrap();
    assert!(!updated.find(&target).unwrap().is_expandable());

    assert!(workflow.expand_node(&target).await.is_err());
    let root = workflow.root().await.unwrap();
    assert_eq!(root.find(&target).unwrap().children.len(), 3);
}
