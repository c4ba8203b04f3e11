//! This module contains the macros used in the project.

/// Resolve one required value: the command line (flag or environment), then the
/// config file section, otherwise return a missing credential error.
macro_rules! config_value {
    ($cli_value:expr, $config_data:ident, $setting_name:ident, $key_name:ident, $flag:expr, $env:expr) => {
        match $cli_value.as_deref().filter(|v| !v.is_empty()) {
            Some(value) => value.to_string(),
            None => match $config_data
                .$setting_name
                .as_ref()
                .and_then(|section| section.$key_name.as_deref())
                .filter(|v| !v.is_empty())
            {
                Some(value) => value.to_string(),
                None => {
                    return Err($crate::errors::GhToGiteaError::missing_credential(
                        $flag, $env,
                    ))
                }
            },
        }
    };
}

pub(crate) use config_value;
