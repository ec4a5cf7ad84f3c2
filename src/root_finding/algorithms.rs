//! Root-refinement algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum, which enumerates the four refiners run on 
//! every bracket, along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.  


/// Newton variants and secant use heuristic defaults from 
/// [`Algorithm::default_max_iter`]. This cap is only applied when bisection's 
/// theoretical iteration bound would otherwise exceed it.  
///
/// Guards against bounds that are mathematically valid but computationally 
/// excessive (e.g. a tolerance below the spacing of representable numbers).
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500; 


/// Refinement algorithm variants, in the order a survey runs them. 
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm { 
    Bisection,
    Newton, 
    ModifiedNewton, 
    Secant, 
}

impl Algorithm { 
    /// All refiners in survey order. 
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bisection, 
        Algorithm::Newton, 
        Algorithm::ModifiedNewton, 
        Algorithm::Secant, 
    ];

    /// Default iteration count if `max_iterations` is unset in config. 
    ///  
    /// # Notes 
    /// - Applied only when `max_iterations` is unset.  
    /// - [`Algorithm::Bisection`] returns `None`, meaning "compute the 
    ///   theoretical bound instead". If that bound exceeds practical limits, 
    ///   [`GLOBAL_MAX_ITER_FALLBACK`] is used.  
    pub const fn default_max_iter(self) -> Option<usize> { 
        match self { 
            Algorithm::Bisection      => None, 
            Algorithm::Newton 
            | Algorithm::ModifiedNewton => Some(200), 
            Algorithm::Secant         => Some(300), 
        }
    }

    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Bisection      => "bisection", 
            Algorithm::Newton         => "newton",
            Algorithm::ModifiedNewton => "modified_newton",
            Algorithm::Secant         => "secant", 
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
