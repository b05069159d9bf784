//! This directory provides some features for research.
//! Measure the followings of the ID3 learner
//! - Test accuracy / zero-one loss
//! - Learning curve (accuracy per training size)

/// Provides the learning curve experiment.
pub mod learning_curve;

/// Defines accuracy and loss functions.
pub mod loss_functions;

pub use learning_curve::{
    CurvePoint,
    LearningCurve,
    plot_learning_curve,
};
pub use loss_functions::{
    accuracy,
    zero_one_loss,
};
