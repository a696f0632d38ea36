/*!
# `WHILE <comparison> <label>`

## Purpose
Reserved for looping while a comparison holds.

## Remarks
`WHILE` is parsed and listed but running one stops the program with
an `ADVANCED FEATURE` error. Use `FOR` or `IF` with `GOSUB` instead.

*/
