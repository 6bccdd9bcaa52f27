// ============================================================================
// Calculator
// Runs one invocation from raw arguments to a single result
// ============================================================================

use crate::domain::{parse_operand, CalcError, OperandLimits, Operator, Side};
use crate::interfaces::{CalculationEvent, EventHandler};
use crate::numeric::Operand;
use chrono::Utc;
use std::sync::Arc;

/// Three-argument calculator with a pluggable event handler.
///
/// Stages run in order and the first failure ends the invocation:
/// argument count, left operand, right operand, operator, then the
/// arithmetic itself (which owns the zero-divisor check).
pub struct Calculator {
    /// Bounds applied to both operands
    limits: OperandLimits,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a calculator with the default ±9999.9999 limits
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            limits: OperandLimits::default(),
            event_handler,
        }
    }

    /// Create a calculator with custom limits
    pub fn with_limits(
        limits: OperandLimits,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, String> {
        limits.validate()?;
        Ok(Self {
            limits,
            event_handler,
        })
    }

    /// Limits in effect
    pub fn limits(&self) -> &OperandLimits {
        &self.limits
    }

    /// Evaluate a raw `<lhs> <operator> <rhs>` argument list.
    pub fn evaluate<S: AsRef<str>>(&self, args: &[S]) -> Result<Operand, CalcError> {
        let mut events = vec![CalculationEvent::ArgumentsReceived {
            count: args.len(),
            timestamp: Utc::now(),
        }];

        let outcome = match args {
            [lhs, symbol, rhs] => self.run(lhs.as_ref(), symbol.as_ref(), rhs.as_ref(), &mut events),
            _ => Err(CalcError::ArgumentCount {
                received: args.len(),
            }),
        };

        if let Err(err) = &outcome {
            events.push(CalculationEvent::CalculationRejected {
                reason: err.to_string(),
                timestamp: Utc::now(),
            });
        }

        self.event_handler.on_events(events);
        outcome
    }

    /// Evaluate already separated operands and operator.
    pub fn calculate(&self, lhs: &str, symbol: &str, rhs: &str) -> Result<Operand, CalcError> {
        self.evaluate(&[lhs, symbol, rhs])
    }

    fn run(
        &self,
        lhs: &str,
        symbol: &str,
        rhs: &str,
        events: &mut Vec<CalculationEvent>,
    ) -> Result<Operand, CalcError> {
        let lhs = self.accept_operand(lhs, Side::Left, events)?;
        let rhs = self.accept_operand(rhs, Side::Right, events)?;
        let operator: Operator = symbol.parse()?;

        let result = operator.apply(lhs, rhs)?;
        events.push(CalculationEvent::CalculationCompleted {
            operator,
            result: result.to_decimal(),
            timestamp: Utc::now(),
        });

        Ok(result)
    }

    fn accept_operand(
        &self,
        raw: &str,
        side: Side,
        events: &mut Vec<CalculationEvent>,
    ) -> Result<Operand, CalcError> {
        let value = parse_operand(raw, side, &self.limits)?;
        events.push(CalculationEvent::OperandAccepted {
            side,
            value: value.to_decimal(),
            timestamp: Utc::now(),
        });
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::format_grouped;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<CalculationEvent>>);

    impl EventHandler for Recorder {
        fn on_event(&self, event: CalculationEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn calculator() -> Calculator {
        Calculator::new(Arc::new(NoOpEventHandler))
    }

    fn formatted(lhs: &str, op: &str, rhs: &str) -> String {
        format_grouped(calculator().calculate(lhs, op, rhs).unwrap())
    }

    fn message(args: &[&str]) -> String {
        calculator().evaluate(args).unwrap_err().to_string()
    }

    #[test]
    fn test_addition() {
        assert_eq!(formatted("1", "+", "2"), "3");
        assert_eq!(formatted("1", "+", "0.2"), "1.2");
        assert_eq!(formatted("0.3", "+", "2"), "2.3");
        assert_eq!(formatted("0.1", "+", "0.2"), "0.3");
        assert_eq!(formatted("-1", "+", "0.2"), "-0.8");
        assert_eq!(formatted("3", "+", "-4.5"), "-1.5");
        assert_eq!(formatted("-3", "+", "-4.5"), "-7.5");
        assert_eq!(formatted("9999.9999", "+", "9999.9999"), "19,999.9998");
        assert_eq!(formatted("-9999.9999", "+", "-9999.9999"), "-19,999.9998");
        assert_eq!(formatted("4.5", "+", "0"), "4.5");
        assert_eq!(formatted("0", "+", "5.123"), "5.123");
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(formatted("5", "-", "3"), "2");
        assert_eq!(formatted("5.5", "-", "3.2"), "2.3");
        assert_eq!(formatted("5", "-", "0.2"), "4.8");
        assert_eq!(formatted("0.5", "-", "0.3"), "0.2");
        assert_eq!(formatted("-5", "-", "3"), "-8");
        assert_eq!(formatted("5", "-", "-3"), "8");
        assert_eq!(formatted("-5", "-", "-3"), "-2");
        assert_eq!(formatted("9999.9999", "-", "-9999.9999"), "19,999.9998");
        assert_eq!(formatted("-9999.9999", "-", "9999.9999"), "-19,999.9998");
        assert_eq!(formatted("0", "-", "5.123"), "-5.123");
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(formatted("5", "*", "3"), "15");
        assert_eq!(formatted("5.5", "*", "3.2"), "17.6");
        assert_eq!(formatted("5", "*", "0.2"), "1");
        assert_eq!(formatted("0.5", "*", "3"), "1.5");
        assert_eq!(formatted("-5", "*", "3"), "-15");
        assert_eq!(formatted("5", "*", "-3"), "-15");
        assert_eq!(formatted("-5", "*", "-3"), "15");
        assert_eq!(formatted("9999.9999", "*", "-9999.9999"), "-99,999,998");
        assert_eq!(formatted("4.5", "*", "0"), "0");
        assert_eq!(formatted("0", "*", "5.123"), "0");
    }

    #[test]
    fn test_division() {
        assert_eq!(formatted("15", "/", "3"), "5");
        assert_eq!(formatted("5.5", "/", "1.1"), "5");
        assert_eq!(formatted("5", "/", "0.2"), "25");
        assert_eq!(formatted("0.5", "/", "0.1"), "5");
        assert_eq!(formatted("-15", "/", "3"), "-5");
        assert_eq!(formatted("15", "/", "-3"), "-5");
        assert_eq!(formatted("-15", "/", "-3"), "5");
        assert_eq!(formatted("9999.9999", "/", "-9999.9999"), "-1");
        assert_eq!(formatted("0", "/", "5.123"), "0");
        assert_eq!(formatted("1", "/", "3"), "0.3333");
        assert_eq!(formatted("2", "/", "3"), "0.6667");
    }

    #[test]
    fn test_argument_count() {
        let cases: [&[&str]; 5] = [
            &[],
            &["1"],
            &["1", "+"],
            &["1", "+", "2", "3"],
            &["1", "+", "2", "3", "4"],
        ];
        for args in cases {
            assert_eq!(
                calculator().evaluate(args),
                Err(CalcError::ArgumentCount {
                    received: args.len()
                })
            );
        }
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(
            message(&["10000", "+", "2"]),
            "左辺: 10000は最大値9999.9999を上回っています"
        );
        assert_eq!(
            message(&["10000", "-", "10000"]),
            "左辺: 10000は最大値9999.9999を上回っています"
        );
        assert_eq!(
            message(&["2", "*", "10000"]),
            "右辺: 10000は最大値9999.9999を上回っています"
        );
        assert_eq!(
            message(&["-10000", "/", "2"]),
            "左辺: -10000は最小値-9999.9999を下回っています"
        );
        assert_eq!(
            message(&["-10000", "+", "-10000"]),
            "左辺: -10000は最小値-9999.9999を下回っています"
        );
        assert_eq!(message(&["2", "-", "-10000"]), "右辺: -9999.9999を下回っています");
        assert_eq!(
            message(&["1.00001", "*", "2"]),
            "左辺: 1.00001は小数点第4位以下で収まっていません"
        );
        assert_eq!(
            message(&["1.000004", "/", "1.000002"]),
            "左辺: 1.000004は小数点第4位以下で収まっていません"
        );
        assert_eq!(
            message(&["1", "+", "1.000002"]),
            "右辺: 1.000002は小数点第4位以下で収まっていません"
        );
        assert_eq!(
            message(&["123hello", "-", "1.000002"]),
            "左辺: 123helloは数値である必要があります"
        );
        assert_eq!(
            message(&["123hello", "*", "456world"]),
            "左辺: 123helloは数値である必要があります"
        );
        assert_eq!(
            message(&["123", "/", "456world"]),
            "右辺: 456worldは数値である必要があります"
        );
    }

    #[test]
    fn test_operands_checked_before_operator() {
        assert_eq!(
            message(&["abc", "%", "1"]),
            "左辺: abcは数値である必要があります"
        );
        assert_eq!(message(&["3", "++", "2"]), "演算子: ++はサポートされていません");
        assert_eq!(message(&["3", "**", "2"]), "演算子: **はサポートされていません");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(message(&["1", "/", "0"]), "0で割ることはできません");
        assert_eq!(message(&["0", "/", "0"]), "0で割ることはできません");
        assert_eq!(message(&["-3.5", "/", "0.0000"]), "0で割ることはできません");
    }

    #[test]
    fn test_events_on_success() {
        let recorder = Arc::new(Recorder::default());
        let calculator = Calculator::new(recorder.clone());
        calculator.calculate("5", "*", "0.2").unwrap();

        let events = recorder.0.lock().unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], CalculationEvent::ArgumentsReceived { count: 3, .. }));
        assert!(matches!(
            events[1],
            CalculationEvent::OperandAccepted {
                side: Side::Left,
                ..
            }
        ));
        assert!(matches!(
            events[2],
            CalculationEvent::OperandAccepted {
                side: Side::Right,
                ..
            }
        ));
        assert!(matches!(
            events[3],
            CalculationEvent::CalculationCompleted {
                operator: Operator::Multiply,
                ..
            }
        ));
    }

    #[test]
    fn test_events_on_rejection() {
        let recorder = Arc::new(Recorder::default());
        let calculator = Calculator::new(recorder.clone());
        calculator.calculate("1", "+", "x").unwrap_err();

        let events = recorder.0.lock().unwrap();
        assert_eq!(events.len(), 3);
        match events.last() {
            Some(CalculationEvent::CalculationRejected { reason, .. }) => {
                assert_eq!(reason, "右辺: xは数値である必要があります");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_limits() {
        let ten = Operand::from_raw(100_000);
        let limits = OperandLimits::default()
            .with_max(ten)
            .with_min(Operand::from_raw(-100_000));
        let calculator = Calculator::with_limits(limits, Arc::new(NoOpEventHandler)).unwrap();

        assert_eq!(calculator.limits().max, ten);
        assert_eq!(
            calculator.calculate("11", "+", "1").unwrap_err().to_string(),
            "左辺: 11は最大値10を上回っています"
        );
        assert_eq!(
            calculator.calculate("10", "*", "10").unwrap(),
            Operand::from_raw(1_000_000)
        );

        let inverted = OperandLimits::new(Operand::from_raw(10_000), Operand::ZERO);
        assert!(Calculator::with_limits(inverted, Arc::new(NoOpEventHandler)).is_err());
    }

    #[test]
    fn test_result_overflow_is_reported() {
        let limits = OperandLimits::new(Operand::MIN, Operand::MAX);
        let calculator = Calculator::with_limits(limits, Arc::new(NoOpEventHandler)).unwrap();

        let err = calculator
            .calculate("922337203685477", "*", "922337203685477")
            .unwrap_err();
        assert!(matches!(err, CalcError::Numeric(_)));
        assert_eq!(err.to_string(), "計算結果が扱える範囲を超えています");
    }
}
