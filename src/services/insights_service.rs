//! Servicio de insights operativos
//!
//! Este módulo serializa datos operativos recientes, los incrusta en un
//! prompt fijo y los envía a un servicio externo de generación de texto
//! (API compatible con chat-completions). La respuesta debe cumplir el
//! esquema de cuatro campos; si no valida, es un fallo duro sin resultado
//! parcial. No hay política de reintentos más allá del timeout del cliente.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::errors::AppError;

/// Reporte estructurado devuelto por el servicio de insights
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightsReport {
    pub summary: String,
    pub trends: Vec<String>,
    pub anomalies: Vec<String>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

pub struct InsightsService {
    api_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl InsightsService {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            api_url,
            api_key,
            model,
            client,
        }
    }

    /// Generar el reporte de insights a partir de dos arrays JSON
    pub async fn generate(
        &self,
        sales_data: &serde_json::Value,
        performance_data: &serde_json::Value,
    ) -> Result<InsightsReport, AppError> {
        let prompt = build_prompt(sales_data, performance_data);

        tracing::info!("🤖 Enviando datos operativos al servicio de insights");

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error llamando al servicio de insights: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "El servicio de insights respondió {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Respuesta de insights ilegible: {}", e)))?;

        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| AppError::ExternalApi("El servicio de insights no devolvió contenido".to_string()))?;

        let report = parse_report(content)?;

        tracing::info!(
            "✅ Reporte de insights generado: {} tendencias, {} anomalías",
            report.trends.len(),
            report.anomalies.len()
        );

        Ok(report)
    }
}

/// Construir el prompt fijo con los dos arrays incrustados
fn build_prompt(sales_data: &serde_json::Value, performance_data: &serde_json::Value) -> String {
    format!(
        "You are a logistics operations analyst. Analyze the following fleet data and \
         respond ONLY with a JSON object with exactly these fields: \
         \"summary\" (string), \"trends\" (array of strings), \
         \"anomalies\" (array of strings), \"opportunities\" (array of strings).\n\n\
         Trip and revenue records:\n{}\n\n\
         Vehicle and driver performance records:\n{}",
        sales_data, performance_data
    )
}

/// Validar el esquema del reporte; un fallo es un error duro
fn parse_report(content: &str) -> Result<InsightsReport, AppError> {
    // Algunos modelos envuelven el JSON en un bloque de código
    let trimmed = content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    serde_json::from_str::<InsightsReport>(trimmed).map_err(|e| {
        AppError::ExternalApi(format!(
            "La respuesta de insights no cumple el esquema esperado: {}",
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_report() {
        let content = r#"{
            "summary": "Operación estable",
            "trends": ["más viajes al norte"],
            "anomalies": [],
            "opportunities": ["consolidar rutas"]
        }"#;

        let report = parse_report(content).unwrap();
        assert_eq!(report.summary, "Operación estable");
        assert_eq!(report.trends.len(), 1);
        assert!(report.anomalies.is_empty());
    }

    #[test]
    fn test_parse_report_in_code_fence() {
        let content = "```json\n{\"summary\":\"ok\",\"trends\":[],\"anomalies\":[],\"opportunities\":[]}\n```";
        let report = parse_report(content).unwrap();
        assert_eq!(report.summary, "ok");
    }

    #[test]
    fn test_schema_failure_is_hard_error() {
        // Falta el campo "opportunities": sin resultado parcial
        let content = r#"{"summary": "x", "trends": [], "anomalies": []}"#;
        assert!(matches!(parse_report(content), Err(AppError::ExternalApi(_))));

        assert!(matches!(parse_report("no es json"), Err(AppError::ExternalApi(_))));
    }

    #[test]
    fn test_prompt_embeds_both_arrays() {
        let sales = json!([{"trip": "TRP-000001", "revenue": 2500}]);
        let performance = json!([{"driver": "DRV-000001", "safety_score": 95}]);

        let prompt = build_prompt(&sales, &performance);
        assert!(prompt.contains("TRP-000001"));
        assert!(prompt.contains("DRV-000001"));
        assert!(prompt.contains("\"opportunities\""));
    }
}
