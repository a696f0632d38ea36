/*!
# Expressions and Types

There are three types of data: integers, floats and strings. The last
character of a variable name picks its type.

```text
a = 5        ' Integer, signed 32-bit
a% = 1.5     ' Float, 32-bit IEEE
a$ = "X"     ' String
```

The comments above are for this manual only; the language has none.

`a`, `a%` and `a$` are three different variables. Variable names start
with a letter and continue with letters and digits. Keywords are not case
sensitive but variable names and labels are.

A value is assigned by writing the variable, `=` and an expression. There
is no `LET` keyword.

Nothing converts between types. Assigning a float to an integer variable,
adding a string to a number, or comparing an integer with a float is a
`TYPE MISMATCH`. A number written with a decimal point is a float and one
without is an integer.

```text
x% = 2       ' ?TYPE MISMATCH
x% = 2.0     ' fine
```

Reading a variable before anything was assigned to it is an
`UNDEFINED VARIABLE` error.

## Operators

`*` and `/` bind tighter than `+` and `-`. Operators of the same
precedence group from the left, so `8 - 2 - 1` is 5. Parentheses group
as usual.

Integer division truncates. Integer math that overflows 32 bits is an
`OVERFLOW` error and integer division by zero is `DIVISION BY ZERO`.
Float math follows IEEE rules. `+` on two strings joins them; the other
operators do not work on strings.

There is no unary minus. Write `0 - 5` for a negative value.

## Comparisons

`IF` and `WHILE` take a single comparison of two integers or two floats.

| Operator | Meaning |
|---|---|
| `=` | equal |
| `<>` | not equal |
| `<` | less |
| `<=` | less or equal |
| `>` | greater |
| `>=` | greater or equal |

## Printing values

Integers print in decimal. Floats print in their shortest form, always
with a decimal point, so 3 prints as `3.0`. Floats from 10000000 up, or
below 0.001, print with an exponent: `1.0E8`, `2.5E-4`.

*/
