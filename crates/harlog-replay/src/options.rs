/// How form params are glued together when a body is rebuilt from `postData.params`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamJoin {
    /// Pairs are written back to back with no separator (`x=yz`).
    #[default]
    Concatenate,
    /// Pairs are joined with `&`, as in form encoding (`x=y&z`).
    Ampersand,
}

impl ParamJoin {
    pub fn separator(self) -> &'static str {
        match self {
            ParamJoin::Concatenate => "",
            ParamJoin::Ampersand => "&",
        }
    }
}

/// Settings for [`RequestMaterializer`](crate::RequestMaterializer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Drop headers whose name contains `:`, such as HTTP/2 pseudo-headers
    pub skip_colon_named_headers: bool,
    pub param_join: ParamJoin,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self {
            skip_colon_named_headers: true,
            param_join: ParamJoin::Concatenate,
        }
    }
}

impl MaterializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_colon_named_headers(mut self, skip: bool) -> Self {
        self.skip_colon_named_headers = skip;
        self
    }

    pub fn with_param_join(mut self, join: ParamJoin) -> Self {
        self.param_join = join;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MaterializeOptions::new();
        assert!(options.skip_colon_named_headers);
        assert_eq!(options.param_join, ParamJoin::Concatenate);
        assert_eq!(options.param_join.separator(), "");
    }

    #[test]
    fn test_builders() {
        let options = MaterializeOptions::new()
            .with_skip_colon_named_headers(false)
            .with_param_join(ParamJoin::Ampersand);
        assert!(!options.skip_colon_named_headers);
        assert_eq!(options.param_join.separator(), "&");
    }
}
