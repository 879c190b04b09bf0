use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// One of the statistics computed for every graph, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Clustering,
    Closeness,
    Size,
    Betweenness,
    MeanPairwiseDistance,
    Eigenvector,
    Assortativity,
    InformationCentrality,
    #[serde(rename = "approximate_current_flow_betweenness_centrality")]
    ApproximateCurrentFlowBetweenness,
    ShannonEntropy,
    DegreeVariance,
}

impl Measure {
    pub const ALL: [Measure; 11] = [
        Measure::Clustering,
        Measure::Closeness,
        Measure::Size,
        Measure::Betweenness,
        Measure::MeanPairwiseDistance,
        Measure::Eigenvector,
        Measure::Assortativity,
        Measure::InformationCentrality,
        Measure::ApproximateCurrentFlowBetweenness,
        Measure::ShannonEntropy,
        Measure::DegreeVariance,
    ];

    /// Column name used in printed and exported tables.
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Clustering => "clustering",
            Measure::Closeness => "closeness",
            Measure::Size => "size",
            Measure::Betweenness => "betweenness",
            Measure::MeanPairwiseDistance => "mean_pairwise_distance",
            Measure::Eigenvector => "eigenvector",
            Measure::Assortativity => "assortativity",
            Measure::InformationCentrality => "information_centrality",
            Measure::ApproximateCurrentFlowBetweenness => {
                "approximate_current_flow_betweenness_centrality"
            }
            Measure::ShannonEntropy => "shannon_entropy",
            Measure::DegreeVariance => "degree_variance",
        }
    }
}

impl Display for Measure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The statistics of one graph, keyed by [Measure] in column order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct MeasureRow(IndexMap<Measure, f64>);

impl MeasureRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, measure: Measure, value: f64) {
        self.0.insert(measure, value);
    }

    pub fn get(&self, measure: Measure) -> Option<f64> {
        self.0.get(&measure).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn measures(&self) -> impl Iterator<Item = Measure> + '_ {
        self.0.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Measure, f64)> + '_ {
        self.0.iter().map(|(m, v)| (*m, *v))
    }
}

impl FromIterator<(Measure, f64)> for MeasureRow {
    fn from_iter<T: IntoIterator<Item = (Measure, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod measure_row_test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serialized_names_match_column_names() {
        for measure in Measure::ALL {
            let json = serde_json::to_string(&measure).unwrap();
            assert_eq!(json, format!("\"{}\"", measure.name()));
        }
    }

    #[test]
    fn rows_keep_insertion_order() {
        let row: MeasureRow = [(Measure::Size, 3.0), (Measure::Clustering, 1.0)]
            .into_iter()
            .collect();
        assert_eq!(
            row.measures().collect::<Vec<_>>(),
            vec![Measure::Size, Measure::Clustering]
        );
        assert_eq!(row.get(Measure::Size), Some(3.0));
        assert_eq!(row.get(Measure::Eigenvector), None);
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"size":3.0,"clustering":1.0}"#
        );
    }
}
