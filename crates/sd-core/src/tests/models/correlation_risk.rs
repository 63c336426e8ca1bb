use crate::CorrelationRisk;

#[test]
fn test_classify_by_magnitude() {
    assert_eq!(CorrelationRisk::classify(0.76), CorrelationRisk::High);
    assert_eq!(CorrelationRisk::classify(-0.76), CorrelationRisk::High);
    assert_eq!(CorrelationRisk::classify(0.23), CorrelationRisk::Medium);
    assert_eq!(CorrelationRisk::classify(-0.12), CorrelationRisk::Low);
    assert_eq!(CorrelationRisk::classify(0.0), CorrelationRisk::Low);
}

#[test]
fn test_classify_boundaries() {
    assert_eq!(CorrelationRisk::classify(0.6), CorrelationRisk::High);
    assert_eq!(CorrelationRisk::classify(0.2), CorrelationRisk::Medium);
    assert_eq!(CorrelationRisk::classify(0.19), CorrelationRisk::Low);
}
