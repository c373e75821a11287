/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `a-a = 0`
    SubtractSelf,

    /// `a+(-b) = a-b`
    AddNegation,

    /// `a-(-b) = a+b`
    SubtractNegation,

    /// `a+a = 2a`
    /// `2a+3a = 5a`
    /// `2a-a = a`
    /// etc.
    CombineLikeTerms,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `-1*a = -a`
    MultiplyNegativeOne,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^5`
    /// etc.
    CombineLikeFactors,

    /// `a/1 = a`
    DivideByOne,

    /// `a/a = 1`
    DivideSelf,

    /// `0/a = 0`
    DivideZero,

    /// `-(-a) = a`
    DoubleNegation,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `1^a = 1`
    PowerOneLeft,

    /// `(a^b)^c = a^(b*c)`, for integer `c`
    PowerPower,

    /// `not not a = a`
    DoubleNot,

    /// `a and true = a`
    AndTrue,

    /// `a and false = false`
    AndFalse,

    /// `a and a = a`
    AndSelf,

    /// `a or true = true`
    OrTrue,

    /// `a or false = a`
    OrFalse,

    /// `a or a = a`
    OrSelf,

    /// `a xor true = not a`
    XorTrue,

    /// `a xor false = a`
    XorFalse,

    /// `a xor a = false`
    XorSelf,

    /// `true -> a = a`
    ImpliesFromTrue,

    /// `false -> a = true`
    ImpliesFromFalse,

    /// `a -> true = true`
    ImpliesTrue,

    /// `a -> a = true`
    ImpliesSelf,

    /// `a = a` is true
    /// `a < a` is false
    /// etc.
    CompareSelf,

    /// `A ∪ ∅ = A`
    UnionEmpty,

    /// `A ∩ ∅ = ∅`
    IntersectionEmpty,

    /// `A ∪ A = A`
    UnionSelf,

    /// `A ∩ A = A`
    IntersectionSelf,

    /// `A \ ∅ = A`
    SetMinusEmpty,

    /// `∅ \ A = ∅`
    EmptySetMinus,

    /// `A \ A = ∅`
    SetMinusSelf,

    /// `a ∈ ∅` is false
    InEmpty,

    /// `ln(e) = 1`
    LnE,

    /// `log(b, b) = 1`
    LogSelf,

    /// `e^ln(a) = a`
    ExpLn,

    /// `sin(x)` identity
    Sin,

    /// `cos(x)` identity
    Cos,

    /// `tan(x)` identity
    Tan,

    /// `cot(-a) = -cot(a)`
    Cot,

    /// `arcsin(1) = pi/2`
    /// `arcsin(-a) = -arcsin(a)`
    Arcsin,

    /// `arccos(0) = pi/2`
    /// `arccos(-1) = pi`
    Arccos,

    /// `arctan(1) = pi/4`
    /// `arctan(-a) = -arctan(a)`
    Arctan,

    /// `arccot(0) = pi/2`
    /// `arccot(1) = pi/4`
    Arccot,

    /// `abs(abs(a)) = abs(a)`
    /// `abs(-a) = abs(a)`
    Abs,

    /// `signum(signum(a)) = signum(a)`
    /// `signum(-a) = -signum(a)`
    Signum,
}
