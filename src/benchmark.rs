//! Matrix vs list comparison over many source/destination queries.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::algorithm::query::{shortest_path, Representation};
use crate::graph::{DualGraph, Graph};
use crate::{Error, Result};

fn as_secs<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// One query run through both representations
#[derive(Debug, Clone, Serialize)]
pub struct QuerySample {
    pub source: usize,
    pub destination: usize,
    pub matrix_distance: Option<u64>,
    pub list_distance: Option<u64>,
    #[serde(rename = "matrix_time_secs", serialize_with = "as_secs")]
    pub matrix_time: Duration,
    #[serde(rename = "list_time_secs", serialize_with = "as_secs")]
    pub list_time: Duration,
}

impl QuerySample {
    pub fn distances_agree(&self) -> bool {
        self.matrix_distance == self.list_distance
    }
}

/// Aggregate timing for one representation
#[derive(Debug, Clone, Serialize)]
pub struct TimingSummary {
    pub representation: Representation,
    #[serde(rename = "total_secs", serialize_with = "as_secs")]
    pub total: Duration,
    #[serde(rename = "average_secs", serialize_with = "as_secs")]
    pub average: Duration,
    #[serde(rename = "min_secs", serialize_with = "as_secs")]
    pub min: Duration,
    #[serde(rename = "max_secs", serialize_with = "as_secs")]
    pub max: Duration,
}

impl TimingSummary {
    fn from_times(representation: Representation, times: &[Duration]) -> Result<Self> {
        let min = times.iter().min().copied();
        let max = times.iter().max().copied();
        let (min, max) = min
            .zip(max)
            .ok_or(Error::InvalidState("no timing samples to summarise"))?;

        let total: Duration = times.iter().sum();
        let count = u32::try_from(times.len())
            .map_err(|_| Error::InvalidParameter("too many timing samples".to_string()))?;
        let average = total / count;

        Ok(TimingSummary {
            representation,
            total,
            average,
            min,
            max,
        })
    }
}

/// Result of comparing both representations on one graph
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Density the graph was generated with, if it was generated
    pub density_percent: Option<u32>,
    pub instances: usize,
    pub matrix: TimingSummary,
    pub list: TimingSummary,
    /// Queries where the two representations returned different distances
    pub disagreements: usize,
    pub samples: Vec<QuerySample>,
}

impl ComparisonReport {
    /// Average matrix time divided by average list time
    pub fn list_speedup(&self) -> f64 {
        let list = self.list.average.as_secs_f64();
        if list == 0.0 {
            return f64::INFINITY;
        }
        self.matrix.average.as_secs_f64() / list
    }

    pub fn with_density(mut self, density_percent: u32) -> Self {
        self.density_percent = Some(density_percent);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs both representations on `instances` random source/destination pairs
pub fn compare_representations<R>(
    graph: &DualGraph<u32>,
    instances: usize,
    rng: &mut R,
) -> Result<ComparisonReport>
where
    R: Rng + ?Sized,
{
    if instances == 0 {
        return Err(Error::InvalidParameter(
            "the number of instances must be positive".to_string(),
        ));
    }

    let n = graph.vertex_count();
    let pairs: Vec<(usize, usize)> = (0..instances)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();

    compare_on_pairs(graph, &pairs)
}

/// Runs both representations on the given pairs, matrix first for each pair
pub fn compare_on_pairs(
    graph: &DualGraph<u32>,
    pairs: &[(usize, usize)],
) -> Result<ComparisonReport> {
    if pairs.is_empty() {
        return Err(Error::InvalidParameter(
            "the number of instances must be positive".to_string(),
        ));
    }

    let mut samples = Vec::with_capacity(pairs.len());
    for &(source, destination) in pairs {
        let matrix = shortest_path(graph, Representation::Matrix, source, destination)?;
        let list = shortest_path(graph, Representation::List, source, destination)?;

        samples.push(QuerySample {
            source,
            destination,
            matrix_distance: matrix.distance,
            list_distance: list.distance,
            matrix_time: matrix.elapsed,
            list_time: list.elapsed,
        });
    }

    let matrix_times: Vec<Duration> = samples.iter().map(|s| s.matrix_time).collect();
    let list_times: Vec<Duration> = samples.iter().map(|s| s.list_time).collect();
    let disagreements = samples.iter().filter(|s| !s.distances_agree()).count();
    if disagreements > 0 {
        log::warn!(
            "{} queries returned different distances per representation",
            disagreements
        );
    }

    let report = ComparisonReport {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        density_percent: None,
        instances: samples.len(),
        matrix: TimingSummary::from_times(Representation::Matrix, &matrix_times)?,
        list: TimingSummary::from_times(Representation::List, &list_times)?,
        disagreements,
        samples,
    };

    log::info!(
        "Compared {} queries on {} vertices: matrix avg {:.6}s, list avg {:.6}s",
        report.instances,
        report.vertex_count,
        report.matrix.average.as_secs_f64(),
        report.list.average.as_secs_f64()
    );

    Ok(report)
}
