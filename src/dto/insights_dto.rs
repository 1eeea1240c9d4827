//! DTOs del generador de insights

use serde::{Deserialize, Serialize};

use crate::services::insights_service::InsightsReport;

/// Request para generar insights; days acota la ventana de datos
#[derive(Debug, Deserialize)]
pub struct GenerateInsightsRequest {
    pub days: Option<i64>,
}

/// Response con el reporte estructurado
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub summary: String,
    pub trends: Vec<String>,
    pub anomalies: Vec<String>,
    pub opportunities: Vec<String>,
}

impl From<InsightsReport> for InsightsResponse {
    fn from(report: InsightsReport) -> Self {
        Self {
            summary: report.summary,
            trends: report.trends,
            anomalies: report.anomalies,
            opportunities: report.opportunities,
        }
    }
}
