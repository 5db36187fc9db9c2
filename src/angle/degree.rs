use geopos_types::Axis;

/// Construct regular expression to parse the space separated
/// Degree-Minute-Second-Hemisphere representation of a coordinate
pub(crate) fn parse_dmsh_re(axis: Axis) -> String {
    let hemispheres = format!(
        "{}{}",
        axis.hemisphere_letter(true),
        axis.hemisphere_letter(false)
    );

    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<deg>\d{{{deg_digits}}})                     # mandatory zero-padded degree VALUE - requires more validation!
        \x20                                            # single space delimiter
        (?P<min>[0-5]\d)                                # two digits minutes VALUE (00..=59)
        \x20                                            # single space delimiter
        (?P<sec>                                        # seconds with the decimal fraction group
            [0-5]\d                                         # two digits whole seconds VALUE (00..=59)
            (?:\.\d+)?                                      # fractions of arcsecond are optional
        )
        \x20                                            # single space delimiter
        (?P<hem>[{hemispheres}])                        # hemisphere letter
        $                                           # match the whole line till the end
        "#,
        deg_digits = axis.degree_digits(),
        hemispheres = hemispheres,
    )
}

/// Construct regular expression to parse the full degrees coordinate
/// without delimiters and with the zero minutes, e.g. `12200E` or `3500N`
pub(crate) fn parse_full_degree_re(axis: Axis) -> String {
    let (degrees, hemispheres) = match axis {
        Axis::Longitude => ("180|1[0-7]\\d|0\\d{2}", "EW"),
        Axis::Latitude => ("90|[0-8]\\d", "NS"),
    };

    format!(
        r#"(?x)
        ^
        (?P<deg>{degrees})                              # zero-padded degree VALUE (up to the axis maximum)
        00                                              # the minutes are always zero
        (?P<hem>[{hemispheres}])                        # hemisphere letter
        $
        "#
    )
}
