/// Build an ordered feature-pattern table for the inflection extractor.
///
/// Each pattern must contain a named capture group matching the feature name:
///
/// ```ignore
/// features![
///     "case"   => r"(^|:)(?<case>v_naz|v_rod)($|:)",
///     "number" => r"(^|:)(?<number>[ps])($|:)",
/// ]
/// ```
#[macro_export]
macro_rules! features {
    [ $($name:literal => $pat:literal),* $(,)? ] => {
        vec![
            $($crate::FeatureRule::new($name, regex::Regex::new($pat).unwrap())),*
        ]
    };
}
