// ==========================================
// VOIS 供需智能服务 - 回归模型
// ==========================================
// 支持两种制品形态:
// - linear: y = intercept + Σ coef_i * x_i
// - forest: 回归树集成, 输出为各树预测均值
// 树节点按先序存储, 子节点下标必须大于父节点 (保证无环)
// ==========================================

use crate::predictor::error::{PredictorError, PredictorResult};
use serde::{Deserialize, Serialize};

// ==========================================
// TreeNode - 回归树节点
// ==========================================
// x[feature] <= threshold 走 left, 否则走 right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    fn validate(&self, n_features: usize, tree_idx: usize) -> PredictorResult<()> {
        if self.nodes.is_empty() {
            return Err(PredictorError::InvalidArtifact(format!(
                "tree {} has no nodes",
                tree_idx
            )));
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= n_features {
                    return Err(PredictorError::InvalidArtifact(format!(
                        "tree {} node {} splits on feature {} (only {} features)",
                        tree_idx, idx, feature, n_features
                    )));
                }
                for child in [*left, *right] {
                    if child <= idx || child >= self.nodes.len() {
                        return Err(PredictorError::InvalidArtifact(format!(
                            "tree {} node {} has invalid child index {}",
                            tree_idx, idx, child
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// 单棵树预测 (调用方已校验特征长度与制品合法性)
    fn predict(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

// ==========================================
// RegressionModel - 回归模型
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    Forest {
        trees: Vec<RegressionTree>,
    },
}

impl RegressionModel {
    /// 制品结构校验
    pub fn validate(&self, n_features: usize) -> PredictorResult<()> {
        match self {
            RegressionModel::Linear { coefficients, .. } => {
                if coefficients.len() != n_features {
                    return Err(PredictorError::InvalidArtifact(format!(
                        "linear model has {} coefficients for {} features",
                        coefficients.len(),
                        n_features
                    )));
                }
                Ok(())
            }
            RegressionModel::Forest { trees } => {
                if trees.is_empty() {
                    return Err(PredictorError::InvalidArtifact(
                        "forest has no trees".to_string(),
                    ));
                }
                trees
                    .iter()
                    .enumerate()
                    .try_for_each(|(i, tree)| tree.validate(n_features, i))
            }
        }
    }

    pub fn predict(&self, features: &[f64]) -> f64 {
        match self {
            RegressionModel::Linear {
                coefficients,
                intercept,
            } => {
                intercept
                    + coefficients
                        .iter()
                        .zip(features)
                        .map(|(c, x)| c * x)
                        .sum::<f64>()
            }
            RegressionModel::Forest { trees } => {
                let total: f64 = trees.iter().map(|t| t.predict(features)).sum();
                total / trees.len() as f64
            }
        }
    }
}
