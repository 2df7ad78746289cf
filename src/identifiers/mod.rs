/*! Language detection oracles

Holds the [Detector] trait consumed by labeling, along with the shipped
[fasttext](https://fasttext.cc) backed implementation.
!*/
mod detection;
mod fasttext;

pub use detection::Detection;
pub use detection::Detector;
pub use self::fasttext::FastText;
