// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Types that can be substituted into a path template.
///
/// The value is returned unencoded, the
/// [PathTemplate][crate::path_template::PathTemplate] encodes it. `Option<T>`
/// returns `None` when empty, which leaves the placeholder unsubstituted and
/// makes the request fail before it is sent.
pub trait PathParameter {
    fn format(&self) -> Option<String>;
}

impl<T: PathParameter> PathParameter for Option<T> {
    fn format(&self) -> Option<String> {
        self.as_ref().and_then(PathParameter::format)
    }
}

impl<T: PathParameter + ?Sized> PathParameter for &T {
    fn format(&self) -> Option<String> {
        (**self).format()
    }
}

impl PathParameter for str {
    fn format(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl PathParameter for String {
    fn format(&self) -> Option<String> {
        Some(self.clone())
    }
}

macro_rules! display_path_parameter {
    ($($t:ty),*) => {
        $(
            impl PathParameter for $t {
                fn format(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_path_parameter!(i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_with_value() {
        let v = Some("abc".to_string());
        assert_eq!(PathParameter::format(&v), Some("abc".to_string()));
    }

    #[test]
    fn optional_without_value() {
        let v = None::<String>;
        assert_eq!(PathParameter::format(&v), None);
    }

    #[test]
    fn required() {
        assert_eq!(PathParameter::format("value"), Some("value".to_string()));
        assert_eq!(PathParameter::format(&"value"), Some("value".to_string()));
        assert_eq!(PathParameter::format(&42_i64), Some("42".to_string()));
        assert_eq!(PathParameter::format(&42_u32), Some("42".to_string()));
    }
}
